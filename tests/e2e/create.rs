use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use filetree::model::CreateType;

/// Folder "src" then "index.ts" inside it, all from the keyboard
#[test]
fn test_create_folder_then_file_inside() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.assert_screen_contains("No files yet");

    harness.create(true, "src").unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("src"));
    harness.assert_screen_contains("Created folder src");

    // The selected folder opens to show the form
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::NONE)
        .unwrap();
    assert!(harness.app().folders().is_open("src"));
    harness.assert_screen_contains("New file: type a name");

    harness.type_text("index.ts").unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();

    assert_eq!(harness.app().store().selected_path(), Some("src"));
    assert!(harness.app().store().create_type().is_none());
    assert!(harness.screen_row(2).starts_with("▼ "));
    assert!(harness.screen_row(3).starts_with("    TS index.ts"));
    harness.assert_screen_contains("Created file index.ts");
}

#[test]
fn test_nested_indentation() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(true, "src").unwrap();
    harness.create(true, "components").unwrap();
    assert_eq!(
        harness.app().store().selected_path(),
        Some("src/components")
    );
    harness.create(false, "App.tsx").unwrap();

    assert!(harness.screen_row(2).starts_with("▼ "));
    assert!(harness.screen_row(3).starts_with("  ▼ "));
    assert!(harness.screen_row(3).contains("components"));
    assert!(harness.screen_row(4).starts_with("      TX App.tsx"));
}

#[test]
fn test_root_file_has_no_selection() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(false, "notes.txt").unwrap();

    assert_eq!(harness.app().store().selected_path(), None);
    assert!(harness.screen_row(2).starts_with("  ≡  notes.txt"));
}

#[test]
fn test_empty_name_keeps_form_open() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('N'), KeyModifiers::SHIFT)
        .unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();

    assert!(harness.app().form_visible());
    assert_eq!(
        harness.app().store().create_type(),
        Some(CreateType::Folder)
    );
    assert!(harness.app().store().file_tree().is_none());
}

#[test]
fn test_escape_cancels_form() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::NONE)
        .unwrap();
    harness.type_text("draft").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();

    assert!(!harness.app().form_visible());
    assert!(harness.app().store().create_type().is_none());
    harness.assert_screen_not_contains("draft");
    harness.assert_screen_contains("No files yet");
}

#[test]
fn test_name_editing_keys() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::NONE)
        .unwrap();
    harness.type_text("mian.rs").unwrap();
    for _ in 0..5 {
        harness.send_key(KeyCode::Left, KeyModifiers::NONE).unwrap();
    }
    harness
        .send_key(KeyCode::Backspace, KeyModifiers::NONE)
        .unwrap();
    harness.send_key(KeyCode::Right, KeyModifiers::NONE).unwrap();
    harness.type_text("i").unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();

    harness.assert_screen_contains("main.rs");
}

#[test]
fn test_recreating_replaces_entry() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(true, "dup").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    harness.create(false, "dup").unwrap();

    harness.assert_screen_contains("Replaced file dup");
    let tree = harness.app().store().file_tree().unwrap();
    assert_eq!(tree.entries().len(), 1);
    assert!(tree.get("dup").is_some_and(|node| node.is_file()));
}

#[test]
fn test_quit_keys() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('q'), KeyModifiers::NONE)
        .unwrap();
    assert!(harness.should_quit());

    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness
        .send_key(KeyCode::Char('c'), KeyModifiers::CONTROL)
        .unwrap();
    assert!(harness.should_quit());
}
