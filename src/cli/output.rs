use anyhow::Result;
use popmenu::MenuOutcome;
use serde_json::json;

/// Print the activated item: its name, or its title when it has none.
pub(crate) fn print_plain(outcome: &MenuOutcome) {
	if !outcome.accepted {
		println!("Menu cancelled");
		return;
	}

	match &outcome.item {
		Some(item) => println!("{}", item.label()),
		None => println!("No selection"),
	}
}

/// Format the outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &MenuOutcome) -> Result<String> {
	let item = match &outcome.item {
		Some(item) => json!({
			"name": item.name,
			"title": item.title,
			"icon": item.icon,
			"secondary_label": item.secondary_label,
		}),
		None => serde_json::Value::Null,
	};

	let payload = json!({
		"accepted": outcome.accepted,
		"item": item,
		"path": outcome.breadcrumbs,
		"query": outcome.query,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &MenuOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
