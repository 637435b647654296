use crate::common::harness::AppTestHarness;
use crossterm::event::{KeyCode, KeyModifiers};
use filetree::config::Config;
use filetree::view::theme::ColorMode;

#[test]
fn test_title_bar() {
    let harness = AppTestHarness::new(80, 24).unwrap();
    assert!(harness.screen_row(0).starts_with(" File Tree"));
    assert!(harness.screen_row(1).starts_with(" ROOT"));
    harness.assert_screen_contains("q quit");
}

#[test]
fn test_theme_button_toggles_mode() {
    let mut harness = AppTestHarness::new(80, 24).unwrap();
    assert_eq!(harness.app().color_mode(), ColorMode::Dark);
    harness.assert_screen_contains("[☀]");

    harness.click_text("[☀]").unwrap();
    assert_eq!(harness.app().color_mode(), ColorMode::Light);
    harness.assert_screen_contains("[☾]");
    harness.assert_screen_contains("Switched to light mode");

    harness
        .send_key(KeyCode::Char('t'), KeyModifiers::NONE)
        .unwrap();
    assert_eq!(harness.app().color_mode(), ColorMode::Dark);
}

#[test]
fn test_initial_mode_from_config() {
    let config = Config {
        theme: ColorMode::Light,
        ..Config::default()
    };
    let harness = AppTestHarness::with_config(80, 24, config).unwrap();
    assert_eq!(harness.app().color_mode(), ColorMode::Light);
    harness.assert_screen_contains("[☾]");
}

#[test]
fn test_hints_can_be_disabled() {
    let mut config = Config::default();
    config.file_explorer.show_hints = false;
    let harness = AppTestHarness::with_config(80, 24, config).unwrap();
    harness.assert_screen_not_contains("q quit");
}

#[test]
fn test_indent_width_from_config() {
    let mut config = Config::default();
    config.file_explorer.indent_width = 4;
    let mut harness = AppTestHarness::with_config(80, 24, config).unwrap();
    harness.create(false, "a.json").unwrap();
    assert!(harness.screen_row(2).starts_with("    {} a.json"));
}
