mod builtins;
mod types;

pub use builtins::{by_name, default_theme, names};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bundled_themes_load() {
		let names = names();
		assert!(names.iter().any(|name| name == "slate"));
		assert!(names.iter().any(|name| name == "solarized"));
		assert!(names.iter().any(|name| name == "light"));
	}

	#[test]
	fn lookup_accepts_aliases_and_case() {
		assert_eq!(by_name("DARK"), by_name("slate"));
		assert!(by_name("paper").is_some());
		assert!(by_name("missing").is_none());
	}

	#[test]
	fn slate_is_the_default() {
		assert_eq!(Some(default_theme()), by_name("slate"));
	}
}
