use crate::store::FileTreeStore;
use std::collections::HashSet;

/// Open/closed state of the directories currently on screen, keyed by path.
///
/// A directory absent from the set is closed. State only lives while its
/// directory is displayed: once an ancestor collapses, the directory is
/// dropped and comes back closed.
#[derive(Debug, Clone, Default)]
pub struct FolderStates {
    open: HashSet<String>,
}

impl FolderStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open.contains(path)
    }

    pub fn open(&mut self, path: &str) {
        self.open.insert(path.to_string());
    }

    pub fn close(&mut self, path: &str) {
        self.open.remove(path);
    }

    /// Flip a directory, returning its new state
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.is_open(path) {
            self.close(path);
            false
        } else {
            self.open(path);
            true
        }
    }

    /// Forget every directory that is no longer displayed
    pub fn retain_displayed(&mut self, displayed: &HashSet<&str>) {
        self.open.retain(|path| displayed.contains(path.as_str()));
    }

    /// Open the selected directory when a create is pending so the inline
    /// form becomes visible. Returns true if a directory was opened.
    pub fn auto_open(&mut self, store: &FileTreeStore, displayed: &HashSet<&str>) -> bool {
        if store.create_type().is_none() {
            return false;
        }
        match store.selected_path() {
            Some(path) if displayed.contains(path) && !self.is_open(path) => {
                tracing::trace!("auto-opening {} for pending create", path);
                self.open(path);
                true
            }
            _ => false,
        }
    }
}
