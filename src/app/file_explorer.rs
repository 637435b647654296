use rust_i18n::t;

use super::*;
use crate::model::{CreateType, Insertion};
use crate::store::CreateRequest;
use crate::view::file_tree::refresh_rows;

/// Rows moved by one mouse wheel notch
const WHEEL_STEP: usize = 3;

impl App {
    /// Rebuild the rows from the store and keep the cursor in range
    pub(super) fn refresh_file_explorer(&mut self) {
        self.rows = refresh_rows(&self.store, &mut self.folders);
        self.cursor = self.cursor.min(self.rows.len().saturating_sub(1));
        self.ensure_cursor_visible();
    }

    /// True when the inline form is on screen and owns text input
    pub fn form_visible(&self) -> bool {
        self.rows.iter().any(TreeRow::is_form)
    }

    /// Arm creation of a file or folder in the selected directory (or the
    /// root) and move the cursor to the inline form
    pub fn file_explorer_begin_create(&mut self, kind: CreateType) {
        tracing::debug!("begin create {} in {:?}", kind, self.store.selected_path());
        self.store.set_create_type(Some(kind));
        self.name_input.clear();
        self.refresh_file_explorer();

        if let Some(index) = self.rows.iter().position(TreeRow::is_form) {
            self.cursor = index;
            self.ensure_cursor_visible();
        }

        let message = match kind {
            CreateType::File => t!("status.new_file"),
            CreateType::Folder => t!("status.new_folder"),
        };
        self.set_status_message(message.to_string());
    }

    /// Drop a pending create, hiding the inline form
    pub fn file_explorer_cancel_create(&mut self) {
        if self.store.create_type().is_none() {
            return;
        }
        tracing::debug!("create cancelled");
        self.store.set_create_type(None);
        self.name_input.clear();
        self.refresh_file_explorer();
    }

    pub fn file_explorer_clear_selection(&mut self) {
        self.store.set_selected_path(None);
        self.refresh_file_explorer();
    }

    /// Apply a click on `row`.
    ///
    /// A directory row flips open/closed and becomes the selection. Any other
    /// row selects the directory around it, or nothing at the root.
    pub fn file_explorer_click(&mut self, row: TreeRow) {
        match &row {
            TreeRow::Folder { path, .. } => {
                let open = self.folders.toggle(path);
                tracing::debug!("{} {}", if open { "opened" } else { "closed" }, path);
                self.store.set_selected_path(Some(path.clone()));
            }
            TreeRow::File { .. } | TreeRow::Form { .. } => {
                self.store
                    .set_selected_path(row.click_target().map(str::to_string));
            }
        }
        self.refresh_file_explorer();
        self.focus_row(&row);
    }

    /// Click the row under the keyboard cursor
    pub fn file_explorer_activate(&mut self) {
        if let Some(row) = self.rows.get(self.cursor).cloned() {
            self.file_explorer_click(row);
        }
    }

    /// Create a node from the inline form.
    ///
    /// An empty name or a missing create type leaves everything as it is.
    pub fn file_explorer_submit(&mut self) {
        let name = self.name_input.value.clone();
        if name.is_empty() {
            return;
        }
        let Some(kind) = self.store.create_type() else {
            return;
        };
        let path = self.store.selected_path().map(str::to_string);

        let outcome = self
            .store
            .on_create(CreateRequest::new(name.clone(), path.clone(), kind));
        self.name_input.clear();
        self.refresh_file_explorer();

        match outcome {
            Insertion::Created => self.set_status_message(
                t!("status.created", kind = kind.to_string(), name = name.as_str()).to_string(),
            ),
            Insertion::Replaced => self.set_status_message(
                t!("status.replaced", kind = kind.to_string(), name = name.as_str()).to_string(),
            ),
            Insertion::Unresolved => self.clear_status_message(),
        }

        let created = match kind {
            CreateType::File => TreeRow::File {
                name,
                parent: path,
                indent: 0,
            },
            CreateType::Folder => TreeRow::Folder {
                path: crate::model::join_path(path.as_deref(), &name),
                name,
                indent: 0,
                open: false,
                selected: true,
            },
        };
        self.focus_row(&created);
    }

    /// Put the cursor on the row matching `target`, or on the directory a
    /// click on it would select. Indent and flags are ignored.
    fn focus_row(&mut self, target: &TreeRow) {
        let found = self.rows.iter().position(|row| match (row, target) {
            (TreeRow::Folder { path: a, .. }, TreeRow::Folder { path: b, .. }) => a == b,
            (
                TreeRow::File {
                    name: a,
                    parent: pa,
                    ..
                },
                TreeRow::File {
                    name: b,
                    parent: pb,
                    ..
                },
            ) => a == b && pa == pb,
            (TreeRow::Form { .. }, TreeRow::Form { .. }) => true,
            _ => false,
        });

        let found = found.or_else(|| {
            let owner = target.click_target()?;
            self.rows
                .iter()
                .position(|row| matches!(row, TreeRow::Folder { path, .. } if path == owner))
        });

        if let Some(index) = found {
            self.cursor = index;
        }
        self.ensure_cursor_visible();
    }

    pub fn file_explorer_navigate_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.ensure_cursor_visible();
    }

    pub fn file_explorer_navigate_down(&mut self) {
        if self.cursor + 1 < self.rows.len() {
            self.cursor += 1;
        }
        self.ensure_cursor_visible();
    }

    pub fn file_explorer_page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.page_size());
        self.ensure_cursor_visible();
    }

    pub fn file_explorer_page_down(&mut self) {
        let last = self.rows.len().saturating_sub(1);
        self.cursor = (self.cursor + self.page_size()).min(last);
        self.ensure_cursor_visible();
    }

    pub fn file_explorer_navigate_home(&mut self) {
        self.cursor = 0;
        self.ensure_cursor_visible();
    }

    pub fn file_explorer_navigate_end(&mut self) {
        self.cursor = self.rows.len().saturating_sub(1);
        self.ensure_cursor_visible();
    }

    fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    /// Scroll the list without moving the cursor
    pub fn file_explorer_scroll(&mut self, down: bool) {
        let max_offset = self.rows.len().saturating_sub(self.viewport_height);
        self.scroll_offset = if down {
            (self.scroll_offset + WHEEL_STEP).min(max_offset)
        } else {
            self.scroll_offset.saturating_sub(WHEEL_STEP)
        };
    }

    /// Adjust the scroll offset so the cursor row is inside the viewport
    pub(super) fn ensure_cursor_visible(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor + 1 - self.viewport_height;
        }
        let max_offset = self.rows.len().saturating_sub(self.viewport_height);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}
