//! Key and mouse routing.
//!
//! While the inline form is on screen it sees every key first; keys it does
//! not use (arrows, page keys) fall through to the explorer bindings.

use super::App;
use crate::model::CreateType;
use crate::view::name_input::NameInputEvent;
use crate::view::ui::ExplorerHit;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Explorer commands reachable from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    MoveHome,
    MoveEnd,
    /// Click the row under the cursor
    Activate,
    NewFile,
    NewFolder,
    ToggleTheme,
    /// Cancel the pending create, or clear the selection
    Escape,
    Quit,
}

/// Map a key press to an explorer command
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::Home => Action::MoveHome,
        KeyCode::End => Action::MoveEnd,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Activate,
        KeyCode::Char('n') => Action::NewFile,
        KeyCode::Char('N') => Action::NewFolder,
        KeyCode::Char('t') => Action::ToggleTheme,
        KeyCode::Esc => Action::Escape,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) {
        tracing::trace!("key: {:?}", key);

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.form_visible() {
            if let Some(event) = self.name_input.handle_key(key) {
                match event {
                    NameInputEvent::Submitted(_) => self.file_explorer_submit(),
                    NameInputEvent::Cancelled => {
                        self.file_explorer_cancel_create();
                        self.clear_status_message();
                    }
                    NameInputEvent::Changed(_) | NameInputEvent::Moved => {}
                }
                return;
            }
        } else {
            self.clear_status_message();
        }

        if let Some(action) = action_for_key(key) {
            self.perform_action(action);
        }
    }

    pub fn perform_action(&mut self, action: Action) {
        match action {
            Action::MoveUp => self.file_explorer_navigate_up(),
            Action::MoveDown => self.file_explorer_navigate_down(),
            Action::PageUp => self.file_explorer_page_up(),
            Action::PageDown => self.file_explorer_page_down(),
            Action::MoveHome => self.file_explorer_navigate_home(),
            Action::MoveEnd => self.file_explorer_navigate_end(),
            Action::Activate => self.file_explorer_activate(),
            Action::NewFile => self.file_explorer_begin_create(CreateType::File),
            Action::NewFolder => self.file_explorer_begin_create(CreateType::Folder),
            Action::ToggleTheme => self.toggle_color_mode(),
            Action::Escape => {
                if self.store.create_type().is_some() {
                    self.file_explorer_cancel_create();
                } else {
                    self.file_explorer_clear_selection();
                }
            }
            Action::Quit => self.quit(),
        }
    }

    /// Insert pasted text into the inline form, dropping line breaks
    pub fn handle_paste(&mut self, text: &str) {
        if !self.form_visible() {
            return;
        }
        for c in text.chars().filter(|c| !c.is_control()) {
            self.name_input.insert(c);
        }
    }

    /// Handle a mouse event. Returns true if a re-render is needed.
    ///
    /// Any button press cancels a pending create before the click itself is
    /// applied, so the target is resolved against the rows as they were
    /// drawn.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(button) => {
                let (col, row) = (mouse.column, mouse.row);
                let on_theme_button = self.theme_button.contains(Position::new(col, row));
                let hit = self.explorer_layout.hit_test(col, row);
                let clicked_row = match hit {
                    Some(ExplorerHit::Row(index)) => self.rows.get(index).cloned(),
                    _ => None,
                };

                self.file_explorer_cancel_create();
                self.clear_status_message();

                if button != MouseButton::Left {
                    return true;
                }
                tracing::trace!("click at ({}, {}): {:?}", col, row, hit);

                if on_theme_button {
                    self.toggle_color_mode();
                    return true;
                }
                match hit {
                    Some(ExplorerHit::NewFile) => {
                        self.file_explorer_begin_create(CreateType::File)
                    }
                    Some(ExplorerHit::NewFolder) => {
                        self.file_explorer_begin_create(CreateType::Folder)
                    }
                    Some(ExplorerHit::Row(_)) => {
                        if let Some(row) = clicked_row {
                            self.file_explorer_click(row);
                        }
                    }
                    Some(ExplorerHit::Background) => self.file_explorer_clear_selection(),
                    Some(ExplorerHit::Header) | None => {}
                }
                true
            }
            MouseEventKind::ScrollUp => {
                self.file_explorer_scroll(false);
                true
            }
            MouseEventKind::ScrollDown => {
                self.file_explorer_scroll(true);
                true
            }
            _ => false,
        }
    }
}
