use anyhow::{Context, Result, anyhow};
use popmenu::{App, MenuDefinition, MenuFormat, MenuOutcome, PopoverParams, UiLabels, theme};

use crate::settings::ResolvedConfig;

const BUILTIN_MENU: &str = include_str!("../assets/default_menu.toml");

const DOCUMENT: &[&str] = &[
	"",
	"The popover opens over this text as a bottom sheet.",
	"",
	"Type to filter the items of the current screen. Up and Down move",
	"the selection, Enter or Right activates it, Left or Esc goes back.",
	"Esc on the first screen closes the popover; Enter or Space opens",
	"it again and q quits.",
	"",
	"While the popover is open the text behind it does not scroll.",
	"Close it and use the arrows, PageUp/PageDown or the mouse wheel.",
];

/// Builds the terminal app from resolved settings and runs it.
pub(crate) struct MenuWorkflow {
	app: App,
}

impl MenuWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let definition = match config.menu_path.as_deref() {
			Some(path) => MenuDefinition::load(path)
				.with_context(|| format!("failed to load menu {}", path.display()))?,
			None => MenuDefinition::parse(BUILTIN_MENU, MenuFormat::Toml)
				.context("built-in menu is invalid")?,
		};
		tracing::debug!(items = definition.items.len(), "menu loaded");

		let params = apply_overrides(definition.into_params(), &config);
		let theme = match config.theme.as_deref() {
			Some(name) => theme::by_name(name).ok_or_else(|| anyhow!("unknown theme `{name}`"))?,
			None => theme::default_theme(),
		};

		let mut labels = UiLabels::default().with_title(config.title);
		if let Some(message) = params.nothing_found_message.clone() {
			labels.nothing_found = message;
		}

		let lines = DOCUMENT.iter().map(|line| (*line).to_string()).collect();
		let mut app = App::new(params).with_document(lines).with_labels(labels);
		app.set_theme(theme);

		Ok(Self { app })
	}

	pub(crate) fn run(self) -> Result<MenuOutcome> {
		popmenu::run(self.app)
	}
}

/// Settings win over the values in the menu file.
fn apply_overrides(mut params: PopoverParams, config: &ResolvedConfig) -> PopoverParams {
	if let Some(searchable) = config.searchable {
		params.searchable = searchable;
	}
	if let Some(placeholder) = config.placeholder.clone() {
		params.placeholder = Some(placeholder);
	}
	if let Some(message) = config.nothing_found_message.clone() {
		params.nothing_found_message = Some(message);
	}
	params
}
