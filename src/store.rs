//! Tree store
//!
//! `FileTreeStore` owns the authoritative tree together with the two pieces
//! of UI state that drive creation: the selected directory path and the
//! pending create type. The tree is only ever mutated by [`FileTreeStore::on_create`];
//! everything else reads it through shared borrows.

use crate::model::{join_path, CreateType, FileSystem, Insertion, Node};

/// Arguments of a single create operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRequest {
    /// Name of the new node, also its key in the parent mapping
    pub name: String,
    /// Target directory path; `None` creates at the root
    pub path: Option<String>,
    pub kind: CreateType,
}

impl CreateRequest {
    pub fn new(name: impl Into<String>, path: Option<String>, kind: CreateType) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
        }
    }
}

#[derive(Debug, Default)]
pub struct FileTreeStore {
    file_tree: Option<FileSystem>,
    selected_path: Option<String>,
    create_type: Option<CreateType>,
}

impl FileTreeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tree, absent until the first create
    pub fn file_tree(&self) -> Option<&FileSystem> {
        self.file_tree.as_ref()
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    /// Kind of node the inline form is waiting for, if any
    pub fn create_type(&self) -> Option<CreateType> {
        self.create_type
    }

    /// Select a directory path; an empty path selects nothing
    pub fn set_selected_path(&mut self, path: Option<String>) {
        self.selected_path = path.filter(|p| !p.is_empty());
    }

    pub fn set_create_type(&mut self, create_type: Option<CreateType>) {
        self.create_type = create_type;
    }

    /// Create a node and move the selection.
    ///
    /// Total: a path that does not resolve to a directory leaves the tree as
    /// it was, but the pending create type and the selection are updated
    /// either way. A new folder becomes the selection; a new file selects its
    /// containing directory.
    pub fn on_create(&mut self, request: CreateRequest) -> Insertion {
        let CreateRequest { name, path, kind } = request;

        let tree = self.file_tree.get_or_insert_with(FileSystem::new);
        let outcome = tree.insert(path.as_deref(), Node::new(kind, name.clone()));

        if outcome.is_applied() {
            tracing::debug!("create {} '{}' in {:?}: {:?}", kind, name, path, outcome);
            if tracing::enabled!(tracing::Level::TRACE) {
                match serde_json::to_string(tree) {
                    Ok(json) => tracing::trace!(tree = %json, "tree after create"),
                    Err(e) => tracing::warn!("Failed to serialize tree: {}", e),
                }
            }
        } else {
            tracing::debug!(
                "create {} '{}' skipped: {:?} does not resolve to a directory",
                kind,
                name,
                path
            );
        }

        self.create_type = None;

        let selected = match kind {
            CreateType::Folder => Some(join_path(path.as_deref(), &name)),
            CreateType::File => path,
        };
        self.set_selected_path(selected);

        outcome
    }
}
