use std::path::Path;

/// Fallback document title when no menu file names one.
pub(super) const DEFAULT_TITLE: &str = "popmenu";

/// Trim `value`, treating blank text as unset.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value
		.map(|value| value.trim().to_string())
		.filter(|value| !value.is_empty())
}

/// Document title derived from the menu file stem.
pub(super) fn default_title_for(menu: Option<&Path>) -> String {
	menu.and_then(Path::file_stem)
		.and_then(|stem| stem.to_str())
		.filter(|stem| !stem.is_empty())
		.unwrap_or(DEFAULT_TITLE)
		.to_string()
}
