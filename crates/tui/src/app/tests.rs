use popmenu_core::{ElementId, ItemParams, PopoverParams, SharedItem};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;

fn items() -> Vec<SharedItem> {
	vec![
		ItemParams::nested(
			"Convert to",
			vec![
				ItemParams::new("Heading").with_name("heading").shared(),
				ItemParams::new("Quote").with_name("quote").shared(),
			],
		)
		.with_name("convert")
		.shared(),
		ItemParams::new("Pin")
			.with_name("pin")
			.close_on_activate(false)
			.shared(),
		ItemParams::new("Move").with_name("move").disabled(true).shared(),
		ItemParams::new("Delete")
			.with_name("delete")
			.with_secondary_label("Del")
			.shared(),
	]
}

fn app() -> App {
	let params = PopoverParams::new(items()).searchable(Some("Filter".to_string()));
	let lines = (1..=40).map(|n| format!("paragraph {n}")).collect();
	App::new(params).with_document(lines)
}

fn press(app: &mut App, code: KeyCode) -> Option<crate::MenuOutcome> {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) -> Option<crate::MenuOutcome> {
	app.handle_mouse(MouseEvent {
		kind,
		column,
		row,
		modifiers: KeyModifiers::NONE,
	})
}

fn screen(app: &mut App) -> String {
	let mut terminal = Terminal::new(TestBackend::new(41, 12)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

/// Rows of the buffer with trailing blanks trimmed.
fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line.trim_end().to_owned());
	}
	lines.join("\n")
}

fn element_of(app: &App, title: &str) -> ElementId {
	app.popover()
		.items()
		.iter()
		.find(|view| view.item().title.as_deref() == Some(title))
		.and_then(|view| view.element())
		.unwrap()
}

fn selected_title(app: &App) -> Option<String> {
	let selected = app.selected()?;
	app.popover()
		.items()
		.iter()
		.find(|view| view.element() == Some(selected))
		.and_then(|view| view.item().title.clone())
}

fn visible_titles(app: &App) -> Vec<String> {
	app.popover()
		.visible_items()
		.filter_map(|view| view.item().title.clone())
		.collect()
}

#[test]
fn hidden_app_draws_only_the_document() {
	let mut app = app();
	insta::assert_snapshot!(screen(&mut app), @r"
Untitled
paragraph 1
paragraph 2
paragraph 3
paragraph 4
paragraph 5
paragraph 6
paragraph 7
paragraph 8
paragraph 9
paragraph 10
paragraph 11
");
}

#[test]
fn open_selects_first_enabled_item_and_locks_document() {
	let mut app = app();
	app.open();
	assert!(app.is_open());
	assert_eq!(selected_title(&app).as_deref(), Some("Convert to"));

	mouse(&mut app, MouseEventKind::ScrollDown, 0, 0);
	press(&mut app, KeyCode::PageDown);
	assert_eq!(app.document().scroll(), 0);

	insta::assert_snapshot!(screen(&mut app), @r"
Untitled
paragraph 1
paragraph 2
paragraph 3
paragraph 4
╭───────────────────────────────────────╮
│/  Filter                              │
│  Convert to                          ›│
│  Pin                                  │
│  Move                                 │
│  Delete                            Del│
╰────────────────enter select · esc back╯
");
}

#[test]
fn document_scrolls_once_hidden() {
	let mut app = app();
	app.open();
	press(&mut app, KeyCode::Esc);
	assert!(!app.is_open());

	press(&mut app, KeyCode::Down);
	mouse(&mut app, MouseEventKind::ScrollDown, 0, 0);
	assert_eq!(app.document().scroll(), 4);
}

#[test]
fn typing_filters_rows_and_reports_nothing_found() {
	let mut app = app();
	app.open();

	type_text(&mut app, "DEL");
	assert_eq!(app.popover().query(), "DEL");
	assert_eq!(visible_titles(&app), vec!["Delete".to_string()]);
	assert_eq!(selected_title(&app).as_deref(), Some("Delete"));

	type_text(&mut app, "z");
	assert!(app.popover().nothing_found());
	assert_eq!(app.selected(), None);
	assert!(screen(&mut app).contains("Nothing found"));

	for _ in 0..4 {
		press(&mut app, KeyCode::Backspace);
	}
	assert_eq!(app.popover().query(), "");
	assert_eq!(visible_titles(&app).len(), 4);
}

#[test]
fn nothing_found_screen_keeps_the_field_and_centres_the_message() {
	let mut app = app();
	app.open();
	type_text(&mut app, "z");

	insta::assert_snapshot!(screen(&mut app), @r"
Untitled
paragraph 1
paragraph 2
paragraph 3
paragraph 4
╭───────────────────────────────────────╮
│/ z                                    │
│             Nothing found             │
│                                       │
│                                       │
│                                       │
╰────────────────enter select · esc back╯
");
}

#[test]
fn enter_opens_nested_screen_and_escape_walks_back() {
	let mut app = app();
	app.open();

	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert_eq!(app.popover().history().depth(), 2);
	assert_eq!(visible_titles(&app), vec!["Heading", "Quote"]);
	assert_eq!(selected_title(&app).as_deref(), Some("Heading"));
	insta::assert_snapshot!(screen(&mut app), @r"
Untitled
paragraph 1
paragraph 2
paragraph 3
paragraph 4
paragraph 5
╭───────────────────────────────────────╮
│‹ Convert to                           │
│/  Filter                              │
│  Heading                              │
│  Quote                                │
╰────────────────enter select · esc back╯
");

	press(&mut app, KeyCode::Esc);
	assert!(app.is_open());
	assert!(app.popover().history().is_root());
	assert!(app.popover().header().is_none());

	press(&mut app, KeyCode::Esc);
	assert!(!app.is_open());
}

#[test]
fn closing_leaf_finishes_with_breadcrumbs() {
	let mut app = app();
	app.open();
	press(&mut app, KeyCode::Right);
	press(&mut app, KeyCode::Down);

	let outcome = press(&mut app, KeyCode::Enter).unwrap();
	assert!(outcome.accepted);
	assert_eq!(outcome.item.unwrap().name.as_deref(), Some("quote"));
	assert_eq!(outcome.breadcrumbs, vec!["Convert to".to_string()]);
	assert!(!app.is_open());
}

#[test]
fn selection_skips_disabled_items_and_toggles_stay_open() {
	let mut app = app();
	app.open();

	press(&mut app, KeyCode::Down);
	assert_eq!(selected_title(&app).as_deref(), Some("Pin"));
	assert!(press(&mut app, KeyCode::Enter).is_none());
	assert!(app.is_open());
	assert!(screen(&mut app).contains("✓ Pin"));

	press(&mut app, KeyCode::Down);
	assert_eq!(selected_title(&app).as_deref(), Some("Delete"));
	press(&mut app, KeyCode::Down);
	assert_eq!(selected_title(&app).as_deref(), Some("Delete"));
}

#[test]
fn click_on_row_activates_it() {
	let mut app = app();
	app.open();
	screen(&mut app);

	let delete = element_of(&app, "Delete");
	let hit = app
		.hits
		.iter()
		.find(|hit| hit.target == Some(delete))
		.copied()
		.unwrap();
	let (column, row) = (hit.area.x + 2, hit.area.y);

	assert!(mouse(&mut app, MouseEventKind::Down(MouseButton::Left), column, row).is_none());
	let outcome = mouse(&mut app, MouseEventKind::Up(MouseButton::Left), column, row).unwrap();
	assert_eq!(outcome.item.unwrap().title.as_deref(), Some("Delete"));
	assert!(outcome.breadcrumbs.is_empty());
}

#[test]
fn drag_is_not_a_click() {
	let mut app = app();
	app.open();
	screen(&mut app);

	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 0, 0);
	mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 1, 0);
	assert!(mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 1, 0).is_none());
	assert!(app.is_open());
}

#[test]
fn overlay_click_hides_and_panel_click_does_not() {
	let mut app = app();
	app.open();
	screen(&mut app);

	let panel = app.hits.iter().find(|hit| hit.target.is_none()).copied().unwrap();
	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), panel.area.x, panel.area.y);
	mouse(&mut app, MouseEventKind::Up(MouseButton::Left), panel.area.x, panel.area.y);
	assert!(app.is_open());

	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 0, 0);
	mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 0, 0);
	assert!(!app.is_open());
	assert!(!app.popover().scroll_lock().handle().is_engaged());
}

#[test]
fn quitting_is_a_cancelled_outcome() {
	let mut app = app();
	let outcome = press(&mut app, KeyCode::Char('q')).unwrap();
	assert!(!outcome.accepted);

	app.open();
	let outcome = app
		.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
		.unwrap();
	assert!(!outcome.accepted);
	assert!(outcome.item.is_none());
}

#[test]
fn reopening_restores_navigation_position() {
	let mut app = app();
	app.open();
	press(&mut app, KeyCode::Enter);
	screen(&mut app);
	mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 0, 0);
	mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 0, 0);
	assert!(!app.is_open());

	press(&mut app, KeyCode::Char(' '));
	assert!(app.is_open());
	assert_eq!(app.popover().history().depth(), 2);
	assert_eq!(selected_title(&app).as_deref(), Some("Heading"));
}
