use super::*;
use crate::test_utils::test_helpers::{TEST_JSON, key, key_with_mods, test_app, type_text};

#[test]
fn test_typing_filters_candidates() {
    let mut app = test_app(TEST_JSON);
    let total = app.search.filtered_count();

    type_text(&mut app, "city");

    assert_eq!(app.search.query(), "city");
    assert!(app.search.filtered_count() < total);
    assert_eq!(app.selected_path(), Some("city"));
    assert_eq!(app.preview(), "NYC");
}

#[test]
fn test_backspace_refilters() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "cityx");
    assert_eq!(app.search.filtered_count(), 0);

    app.handle_key_event(key(KeyCode::Backspace));
    assert_eq!(app.search.query(), "city");
    assert_eq!(app.selected_path(), Some("city"));
}

#[test]
fn test_no_match_clears_selection_and_preview() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "qqqq");

    assert_eq!(app.selected_path(), None);
    assert_eq!(app.preview(), "");
}

#[test]
fn test_down_and_ctrl_n_move_selection() {
    let mut app = test_app(TEST_JSON);
    assert_eq!(app.search.selected_position(), Some(0));

    app.handle_key_event(key(KeyCode::Down));
    assert_eq!(app.search.selected_position(), Some(1));

    app.handle_key_event(key_with_mods(KeyCode::Char('n'), KeyModifiers::CONTROL));
    assert_eq!(app.search.selected_position(), Some(2));
    assert_eq!(app.search.query(), "");
}

#[test]
fn test_up_wraps_to_last_candidate() {
    let mut app = test_app(TEST_JSON);
    let last = app.search.filtered_count() - 1;

    app.handle_key_event(key(KeyCode::Up));
    assert_eq!(app.search.selected_position(), Some(last));

    app.handle_key_event(key_with_mods(KeyCode::Char('p'), KeyModifiers::CONTROL));
    assert_eq!(app.search.selected_position(), Some(last - 1));
}

#[test]
fn test_selection_change_updates_preview() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::Down));

    assert_eq!(app.selected_path(), Some("name"));
    assert_eq!(app.preview(), "test");
}

#[test]
fn test_tab_copies_selected_path_into_search() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "svcname");
    let selected = app.selected_path().map(str::to_string);
    assert!(selected.is_some());

    app.handle_key_event(key(KeyCode::Tab));

    assert_eq!(Some(app.search.query().to_string()), selected);
    assert_eq!(app.selected_path().map(str::to_string), selected);
}

#[test]
fn test_tab_without_selection_is_noop() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "qqqq");
    app.handle_key_event(key(KeyCode::Tab));
    assert_eq!(app.search.query(), "qqqq");
}

#[test]
fn test_enter_quits_with_results() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "age");
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), Some(OutputMode::Results));
    assert_eq!(app.final_output().as_deref(), Some("30"));
}

#[test]
fn test_shift_enter_quits_with_path() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "age");
    app.handle_key_event(key_with_mods(KeyCode::Enter, KeyModifiers::SHIFT));

    assert!(app.should_quit());
    assert_eq!(app.output_mode(), Some(OutputMode::Query));
    assert_eq!(app.final_output().as_deref(), Some("age"));
}

#[test]
fn test_alt_enter_quits_with_path() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key_with_mods(KeyCode::Enter, KeyModifiers::ALT));
    assert_eq!(app.output_mode(), Some(OutputMode::Query));
}

#[test]
fn test_enter_without_selection_keeps_running() {
    let mut app = test_app(TEST_JSON);
    type_text(&mut app, "qqqq");
    app.handle_key_event(key(KeyCode::Enter));

    assert!(!app.should_quit());
    assert_eq!(app.output_mode(), None);
}

#[test]
fn test_esc_and_ctrl_c_quit_without_output() {
    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.should_quit());
    assert_eq!(app.final_output(), None);

    let mut app = test_app(TEST_JSON);
    app.handle_key_event(key_with_mods(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
    assert_eq!(app.output_mode(), None);
}

#[test]
fn test_page_keys_scroll_preview() {
    let mut app = test_app(TEST_JSON);
    app.preview_scroll.update_bounds(100, 20);

    app.handle_key_event(key(KeyCode::PageDown));
    assert_eq!(app.preview_scroll.offset, 10);
    app.handle_key_event(key_with_mods(KeyCode::Char('d'), KeyModifiers::CONTROL));
    assert_eq!(app.preview_scroll.offset, 20);

    app.handle_key_event(key(KeyCode::PageUp));
    assert_eq!(app.preview_scroll.offset, 10);
    app.handle_key_event(key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL));
    assert_eq!(app.preview_scroll.offset, 0);

    // Scrolling never touches the search text
    assert_eq!(app.search.query(), "");
}

#[test]
fn test_paste_strips_newlines() {
    let mut app = test_app(TEST_JSON);
    app.handle_paste_event("ci\nty\r\n".to_string());

    assert_eq!(app.search.query(), "city");
    assert_eq!(app.selected_path(), Some("city"));
}

#[test]
fn test_edits_mark_dirty() {
    let mut app = test_app(TEST_JSON);
    app.clear_dirty();
    type_text(&mut app, "a");
    assert!(app.should_render());
}
