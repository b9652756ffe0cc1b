use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	match &config.menu_path {
		Some(path) => println!("  Menu: {}", path.display()),
		None => println!("  Menu: (built-in)"),
	}
	println!("  Title: {}", config.title);
	println!(
		"  Search: {}",
		config
			.searchable
			.map(bool_to_word)
			.unwrap_or("(menu default)")
	);
	if let Some(placeholder) = &config.placeholder {
		println!("  Placeholder: {placeholder}");
	}
	if let Some(message) = &config.nothing_found_message {
		println!("  Nothing found message: {message}");
	}
	println!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	);
	println!(
		"  Log level: {}",
		config.log_level.as_deref().unwrap_or(popmenu::logging::DEFAULT_LEVEL)
	);
	if let Some(file) = &config.log_file {
		println!("  Log file: {}", file.display());
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
