use ratatui::style::{Color, Modifier, Style};

/// Styles for every element the popover draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Header row of nested screens.
	pub header: Style,
	/// Enabled item rows.
	pub item: Style,
	/// Row under the keyboard selection.
	pub selected: Style,
	/// Disabled item rows.
	pub disabled: Style,
	/// Secondary labels drawn after titles.
	pub secondary: Style,
	/// Search field text and glyph.
	pub prompt: Style,
	/// Placeholder in the empty search field.
	pub placeholder: Style,
	/// "Nothing found" message.
	pub empty: Style,
	/// Popover panel border.
	pub border: Style,
	/// Applied over the background while the overlay is visible.
	pub overlay: Style,
	/// Background document text.
	pub document: Style,
}

impl Theme {
	/// Style for the back marker, derived from the header colour.
	#[must_use]
	pub fn back_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	/// Style for the text cursor in the search field.
	#[must_use]
	pub fn cursor_style(&self) -> Style {
		self.prompt.add_modifier(Modifier::REVERSED)
	}
}

/// Describes a theme instance that can be looked up by name.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	/// The name of the theme.
	pub name: String,
	/// The theme configuration.
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	/// Creates a new theme registration with the given name and theme.
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` refers to this theme, ignoring case.
	#[must_use]
	pub fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
