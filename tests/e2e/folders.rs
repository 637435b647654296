use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};

fn harness_with_src() -> AppTestHarness {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(true, "src").unwrap();
    harness.create(false, "index.ts").unwrap();
    harness
}

#[test]
fn test_enter_toggles_folder_under_cursor() {
    let mut harness = harness_with_src();
    harness.assert_screen_contains("index.ts");

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();
    assert!(!harness.app().folders().is_open("src"));
    harness.assert_screen_not_contains("index.ts");
    assert!(harness.screen_row(2).starts_with("▶ "));

    harness
        .send_key(KeyCode::Char(' '), KeyModifiers::NONE)
        .unwrap();
    assert!(harness.app().folders().is_open("src"));
    harness.assert_screen_contains("index.ts");
}

#[test]
fn test_collapsing_parent_forgets_child_state() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(true, "a").unwrap();
    harness.create(true, "b").unwrap();
    harness.create(false, "deep.txt").unwrap();
    assert!(harness.app().folders().is_open("a/b"));
    harness.assert_screen_contains("deep.txt");

    // Close "a", then open it again: "b" comes back closed
    harness.click_text("a").unwrap();
    assert!(!harness.app().folders().is_open("a"));
    assert!(!harness.app().folders().is_open("a/b"));
    harness.click_text("a").unwrap();

    assert!(harness.app().folders().is_open("a"));
    assert!(!harness.app().folders().is_open("a/b"));
    harness.assert_screen_not_contains("deep.txt");
}

#[test]
fn test_cursor_keys_move_between_rows() {
    let mut harness = harness_with_src();
    harness.create(false, "b.ts").unwrap();
    assert_eq!(harness.app().rows().len(), 3);

    harness.send_key(KeyCode::Home, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().cursor(), 0);
    harness
        .send_key(KeyCode::Char('j'), KeyModifiers::NONE)
        .unwrap();
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().cursor(), 2);
    harness.send_key(KeyCode::Down, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().cursor(), 2);
    harness
        .send_key(KeyCode::Char('k'), KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().cursor(), 1);

    // Activating a file selects its folder
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("src"));
    assert!(harness.app().folders().is_open("src"));
}

#[test]
fn test_escape_clears_selection() {
    let mut harness = harness_with_src();
    assert_eq!(harness.app().store().selected_path(), Some("src"));

    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().store().selected_path(), None);

    // With nothing selected the form goes back to the root
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::NONE)
        .unwrap();
    assert!(harness.app().rows()[0].is_form());
}
