//! Theme files: one TOML document per theme, a style table per popover part.

use anyhow::{Context, Result, bail};
use include_dir::Dir;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::style::theme::types::{Theme, ThemeRegistration};

pub(super) struct BuiltinThemes {
	pub(super) registrations: Vec<ThemeRegistration>,
	pub(super) default_theme: Theme,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ThemeFile {
	name: String,
	#[serde(default)]
	aliases: Vec<String>,
	#[serde(default)]
	default: bool,
	styles: PopoverStyles,
}

/// One entry per styled part of the popover and the page behind it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PopoverStyles {
	header: PartStyle,
	item: PartStyle,
	selected: PartStyle,
	disabled: PartStyle,
	secondary: PartStyle,
	prompt: PartStyle,
	placeholder: PartStyle,
	empty: PartStyle,
	border: PartStyle,
	overlay: PartStyle,
	document: PartStyle,
}

impl From<PopoverStyles> for Theme {
	fn from(styles: PopoverStyles) -> Self {
		Self {
			header: styles.header.into(),
			item: styles.item.into(),
			selected: styles.selected.into(),
			disabled: styles.disabled.into(),
			secondary: styles.secondary.into(),
			prompt: styles.prompt.into(),
			placeholder: styles.placeholder.into(),
			empty: styles.empty.into(),
			border: styles.border.into(),
			overlay: styles.overlay.into(),
			document: styles.document.into(),
		}
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PartStyle {
	fg: Option<Colour>,
	bg: Option<Colour>,
	modifiers: Vec<Emphasis>,
}

impl From<PartStyle> for Style {
	fn from(part: PartStyle) -> Self {
		let base = Style::new().add_modifier(
			part.modifiers
				.iter()
				.fold(Modifier::empty(), |acc, emphasis| acc | emphasis.0),
		);
		let base = match part.fg {
			Some(Colour(colour)) => base.fg(colour),
			None => base,
		};
		match part.bg {
			Some(Colour(colour)) => base.bg(colour),
			None => base,
		}
	}
}

/// `#rrggbb` or a terminal colour name such as `blue` or `dark_gray`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
struct Colour(Color);

impl TryFrom<String> for Colour {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value
			.trim()
			.parse::<Color>()
			.map(Self)
			.map_err(|_| format!("unknown colour `{value}`"))
	}
}

/// Text emphasis the themes rely on.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
struct Emphasis(Modifier);

impl TryFrom<String> for Emphasis {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		let modifier = match value.trim().to_ascii_lowercase().as_str() {
			"bold" => Modifier::BOLD,
			"dim" => Modifier::DIM,
			"italic" => Modifier::ITALIC,
			"underlined" => Modifier::UNDERLINED,
			"reversed" => Modifier::REVERSED,
			_ => return Err(format!("unknown modifier `{value}`")),
		};
		Ok(Self(modifier))
	}
}

impl ThemeFile {
	fn into_registration(self) -> ThemeRegistration {
		let name = self.name.trim().to_owned();
		self.aliases
			.iter()
			.map(|alias| alias.trim())
			.filter(|alias| !alias.is_empty())
			.fold(
				ThemeRegistration::new(name, self.styles.into()),
				|registration, alias| registration.alias(alias),
			)
	}
}

fn parse_theme_file(name: &str, contents: &str) -> Result<ThemeFile> {
	toml::from_str(contents).with_context(|| format!("theme file `{name}` is malformed"))
}

pub(super) fn load_builtin_themes(dir: &Dir) -> Result<BuiltinThemes> {
	let mut files = Vec::new();
	for file in dir.files() {
		let name = file.path().display().to_string();
		let contents = file
			.contents_utf8()
			.with_context(|| format!("theme file `{name}` is not UTF-8"))?;
		files.push(parse_theme_file(&name, contents)?);
	}

	let defaults: Vec<&str> = files
		.iter()
		.filter(|file| file.default)
		.map(|file| file.name.as_str())
		.collect();
	if defaults.len() > 1 {
		bail!("more than one theme claims to be the default: {}", defaults.join(", "));
	}
	let default_name = defaults.first().map(|name| name.trim().to_owned());

	let mut registrations: Vec<ThemeRegistration> =
		files.into_iter().map(ThemeFile::into_registration).collect();
	registrations.sort_by(|a, b| a.name.cmp(&b.name));

	let default_theme = registrations
		.iter()
		.find(|registration| default_name.as_deref() == Some(registration.name.as_str()))
		.or_else(|| registrations.first())
		.map(|registration| registration.theme);
	let Some(default_theme) = default_theme else {
		bail!("no theme files were bundled");
	};

	Ok(BuiltinThemes {
		registrations,
		default_theme,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	const MINIMAL: &str = r##"
name = " ember "
aliases = ["warm", " "]

[styles.header]
fg = "#ff8800"
bg = "dark_gray"
modifiers = ["bold", "Italic"]

[styles.item]
[styles.selected]
modifiers = ["reversed"]
[styles.disabled]
[styles.secondary]
[styles.prompt]
[styles.placeholder]
[styles.empty]
[styles.border]
[styles.overlay]
[styles.document]
"##;

	#[test]
	fn theme_file_becomes_registration() {
		let registration = parse_theme_file("ember.toml", MINIMAL)
			.expect("parses")
			.into_registration();

		assert_eq!(registration.name, "ember");
		assert_eq!(registration.aliases, vec!["warm".to_string()]);
		let header = registration.theme.header;
		assert_eq!(header.fg, Some(Color::Rgb(0xff, 0x88, 0x00)));
		assert_eq!(header.bg, Some(Color::DarkGray));
		assert!(header.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));
		assert_eq!(registration.theme.selected.add_modifier, Modifier::REVERSED);
		assert_eq!(registration.theme.item, Style::new());
	}

	#[test]
	fn unknown_colours_and_modifiers_are_rejected() {
		let bad_colour = MINIMAL.replace("#ff8800", "mauve");
		let error = parse_theme_file("ember.toml", &bad_colour).expect_err("bad colour");
		assert!(format!("{error:#}").contains("unknown colour `mauve`"));

		let bad_modifier = MINIMAL.replace("\"reversed\"", "\"sparkle\"");
		let error = parse_theme_file("ember.toml", &bad_modifier).expect_err("bad modifier");
		assert!(format!("{error:#}").contains("unknown modifier `sparkle`"));
	}

	#[test]
	fn missing_parts_are_an_error() {
		let partial = MINIMAL.replace("[styles.document]\n", "");
		assert!(parse_theme_file("ember.toml", &partial).is_err());
	}
}
