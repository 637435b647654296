use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use filetree::model::CreateType;

#[test]
fn test_toolbar_buttons_arm_create() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();

    harness.click_text("[+folder]").unwrap();
    assert_eq!(
        harness.app().store().create_type(),
        Some(CreateType::Folder)
    );
    harness.type_text("docs").unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("docs"));

    harness.click_text("[+file]").unwrap();
    assert_eq!(harness.app().store().create_type(), Some(CreateType::File));
    assert!(harness.app().folders().is_open("docs"));
    harness.type_text("readme.txt").unwrap();
    harness
        .send_key(KeyCode::Enter, KeyModifiers::NONE)
        .unwrap();

    harness.assert_screen_contains("readme.txt");
}

#[test]
fn test_pointer_down_cancels_pending_create() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.click_text("[+file]").unwrap();
    assert!(harness.app().form_visible());

    harness.click_text("ROOT").unwrap();
    assert!(!harness.app().form_visible());
    assert!(harness.app().store().create_type().is_none());

    // A second button press switches the kind
    harness.click_text("[+file]").unwrap();
    harness.click_text("[+folder]").unwrap();
    assert_eq!(
        harness.app().store().create_type(),
        Some(CreateType::Folder)
    );
}

#[test]
fn test_clicking_file_selects_parent_folder() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(true, "src").unwrap();
    harness.create(false, "lib.rs").unwrap();
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    assert_eq!(harness.app().store().selected_path(), None);

    harness.click_text("lib.rs").unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("src"));
    // The folder itself did not toggle
    assert!(harness.app().folders().is_open("src"));
}

#[test]
fn test_clicking_root_file_or_background_clears_selection() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(false, "top.txt").unwrap();
    harness.create(true, "src").unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("src"));

    harness.click_text("top.txt").unwrap();
    assert_eq!(harness.app().store().selected_path(), None);

    harness.click_text("src").unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("src"));

    // Empty space below the rows
    harness.click(10, 15).unwrap();
    assert_eq!(harness.app().store().selected_path(), None);
}

#[test]
fn test_clicking_form_selects_enclosing_folder() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    harness.create(true, "src").unwrap();
    harness.create(true, "inner").unwrap();
    assert_eq!(harness.app().store().selected_path(), Some("src/inner"));

    harness
        .send_key(KeyCode::Char('n'), KeyModifiers::NONE)
        .unwrap();
    let form_row = harness.app().rows().iter().position(|r| r.is_form()).unwrap() as u16;

    // List rows start below the title bar and explorer header
    harness.click(30, form_row + 2).unwrap();
    assert!(!harness.app().form_visible());
    assert_eq!(harness.app().store().selected_path(), Some("src/inner"));
}

#[test]
fn test_mouse_wheel_scrolls_list() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    for i in 0..30 {
        harness.create(false, &format!("f{i:02}.txt")).unwrap();
    }
    // Clear the "Created ..." status message
    harness.send_key(KeyCode::Esc, KeyModifiers::NONE).unwrap();
    harness.assert_screen_contains("f29.txt");
    harness.assert_screen_not_contains("f00.txt");

    for _ in 0..3 {
        harness.scroll(false, 10, 10).unwrap();
    }
    assert_eq!(harness.app().scroll_offset(), 0);
    harness.assert_screen_contains("f00.txt");
    harness.assert_screen_not_contains("f29.txt");

    harness.scroll(true, 10, 10).unwrap();
    assert_eq!(harness.app().scroll_offset(), 3);
}
