//! Menu definitions loaded from TOML or JSON.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::item::SharedItem;
use crate::mobile::PopoverParams;

/// Serialized description of a popover menu.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuDefinition {
	/// Render a search field above the items.
	pub searchable: Option<bool>,
	pub placeholder: Option<String>,
	pub nothing_found_message: Option<String>,
	pub items: Vec<SharedItem>,
}

/// Format of a menu file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
	Toml,
	Json,
}

impl MenuFormat {
	/// Guess the format from a file extension. Anything but `.json` is TOML.
	#[must_use]
	pub fn from_path(path: &Path) -> Self {
		match path.extension().and_then(|ext| ext.to_str()) {
			Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
			_ => Self::Toml,
		}
	}
}

impl MenuDefinition {
	/// Parse and validate a definition.
	pub fn parse(source: &str, format: MenuFormat) -> Result<Self, MenuError> {
		let definition: Self = match format {
			MenuFormat::Toml => toml::from_str(source)?,
			MenuFormat::Json => serde_json::from_str(source)?,
		};
		definition.validate()?;
		Ok(definition)
	}

	/// Read, parse and validate a menu file.
	pub fn load(path: &Path) -> Result<Self, MenuError> {
		let source = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::parse(&source, MenuFormat::from_path(path))
	}

	/// Check the item tree for problems the popover would only surface at
	/// runtime.
	pub fn validate(&self) -> Result<(), MenuError> {
		if self.items.is_empty() {
			return Err(MenuError::Empty);
		}
		let mut names = HashSet::new();
		validate_items(&self.items, &mut names)
	}

	/// Convert into popover parameters. Search defaults to on.
	#[must_use]
	pub fn into_params(self) -> PopoverParams {
		PopoverParams {
			items: self.items,
			searchable: self.searchable.unwrap_or(true),
			placeholder: self.placeholder,
			nothing_found_message: self.nothing_found_message,
		}
	}
}

fn validate_items<'a>(
	items: &'a [SharedItem],
	names: &mut HashSet<&'a str>,
) -> Result<(), MenuError> {
	for item in items {
		if let Some(name) = item.name.as_deref()
			&& !names.insert(name)
		{
			return Err(MenuError::DuplicateName {
				name: name.to_owned(),
			});
		}

		match item.children.as_deref() {
			Some([]) => {
				return Err(MenuError::EmptyChildren {
					item: item.label().to_owned(),
				});
			}
			Some(children) => validate_items(children, names)?,
			None => {}
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_toml_menu() {
		let menu = MenuDefinition::parse(
			r#"
			placeholder = "Filter"

			[[items]]
			name = "convert"
			title = "Convert to"
			children = [{ name = "heading", title = "Heading" }]

			[[items]]
			name = "delete"
			title = "Delete"
			"#,
			MenuFormat::Toml,
		)
		.expect("valid menu");

		let params = menu.into_params();
		assert!(params.searchable);
		assert_eq!(params.placeholder.as_deref(), Some("Filter"));
		assert!(params.items[0].has_children());
	}

	#[test]
	fn parses_json_menu() {
		let menu = MenuDefinition::parse(
			r#"{"searchable": false, "items": [{"title": "Delete"}]}"#,
			MenuFormat::Json,
		)
		.expect("valid menu");
		assert!(!menu.into_params().searchable);
	}

	#[test]
	fn rejects_duplicate_names_across_levels() {
		let err = MenuDefinition::parse(
			r#"
			[[items]]
			name = "heading"
			title = "Heading"

			[[items]]
			title = "Convert to"
			children = [{ name = "heading", title = "Heading" }]
			"#,
			MenuFormat::Toml,
		)
		.expect_err("duplicate name");
		assert!(matches!(err, MenuError::DuplicateName { name } if name == "heading"));
	}

	#[test]
	fn rejects_empty_groups_and_empty_menus() {
		let err = MenuDefinition::parse(
			"[[items]]\ntitle = \"Convert to\"\nchildren = []\n",
			MenuFormat::Toml,
		)
		.expect_err("empty group");
		assert!(matches!(err, MenuError::EmptyChildren { item } if item == "Convert to"));

		let err = MenuDefinition::parse("items = []", MenuFormat::Toml).expect_err("empty");
		assert!(matches!(err, MenuError::Empty));
	}

	#[test]
	fn format_follows_extension() {
		assert_eq!(MenuFormat::from_path(Path::new("menu.JSON")), MenuFormat::Json);
		assert_eq!(MenuFormat::from_path(Path::new("menu.toml")), MenuFormat::Toml);
		assert_eq!(MenuFormat::from_path(Path::new("menu")), MenuFormat::Toml);
	}
}
