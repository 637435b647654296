use super::folder_state::FolderStates;
use crate::model::{join_path, CreateType, Entries, Node};
use crate::store::FileTreeStore;
use std::collections::HashSet;

/// One line of the explorer, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeRow {
    Folder {
        path: String,
        name: String,
        indent: usize,
        open: bool,
        selected: bool,
    },
    File {
        name: String,
        /// Directory holding the file, `None` at the root
        parent: Option<String>,
        indent: usize,
    },
    /// Inline "new node" form
    Form {
        parent: Option<String>,
        indent: usize,
        kind: CreateType,
    },
}

impl TreeRow {
    /// Nesting steps from the left edge
    pub fn indent(&self) -> usize {
        match self {
            TreeRow::Folder { indent, .. }
            | TreeRow::File { indent, .. }
            | TreeRow::Form { indent, .. } => *indent,
        }
    }

    /// Directory a click on this row selects.
    ///
    /// A folder row selects itself; file and form rows pass the click on to
    /// the directory around them. `None` means the click reached the root
    /// background.
    pub fn click_target(&self) -> Option<&str> {
        match self {
            TreeRow::Folder { path, .. } => Some(path),
            TreeRow::File { parent, .. } | TreeRow::Form { parent, .. } => parent.as_deref(),
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, TreeRow::Form { .. })
    }
}

/// Indent of an inline form inside a directory whose children sit at `depth`.
///
/// A file form lines up with sibling files, one step past the folder
/// chevrons; a folder form lines up with sibling folders.
fn form_indent(depth: usize, kind: CreateType) -> usize {
    match kind {
        CreateType::File => depth + 1,
        CreateType::Folder => depth,
    }
}

/// Flatten the tree into display rows.
///
/// Closed directories hide their children. The inline form is the first row
/// at the root when nothing is selected, or the first child of the selected
/// directory when it is open.
pub fn build_rows(store: &FileTreeStore, folders: &FolderStates) -> Vec<TreeRow> {
    let mut rows = Vec::new();

    if store.selected_path().is_none() {
        if let Some(kind) = store.create_type() {
            rows.push(TreeRow::Form {
                parent: None,
                indent: form_indent(0, kind),
                kind,
            });
        }
    }

    if let Some(tree) = store.file_tree() {
        push_entries(tree.entries(), None, 0, store, folders, &mut rows);
    }

    rows
}

fn push_entries(
    entries: &Entries,
    parent: Option<&str>,
    depth: usize,
    store: &FileTreeStore,
    folders: &FolderStates,
    rows: &mut Vec<TreeRow>,
) {
    for (key, node) in entries.iter() {
        match node {
            Node::File { name } => rows.push(TreeRow::File {
                name: name.clone(),
                parent: parent.map(str::to_string),
                indent: depth + 1,
            }),
            Node::Directory { name, files } => {
                let path = join_path(parent, key);
                push_folder(name, files, path, depth, store, folders, rows);
            }
        }
    }
}

fn push_folder(
    name: &str,
    files: &Entries,
    path: String,
    depth: usize,
    store: &FileTreeStore,
    folders: &FolderStates,
    rows: &mut Vec<TreeRow>,
) {
    let open = folders.is_open(&path);
    let selected = store.selected_path() == Some(path.as_str());

    rows.push(TreeRow::Folder {
        path: path.clone(),
        name: name.to_string(),
        indent: depth,
        open,
        selected,
    });

    if !open {
        return;
    }

    let child_depth = depth + 1;
    if selected {
        if let Some(kind) = store.create_type() {
            rows.push(TreeRow::Form {
                parent: Some(path.clone()),
                indent: form_indent(child_depth, kind),
                kind,
            });
        }
    }

    push_entries(files, Some(&path), child_depth, store, folders, rows);
}

/// Paths of the directories present in `rows`
pub fn displayed_folders(rows: &[TreeRow]) -> HashSet<&str> {
    rows.iter()
        .filter_map(|row| match row {
            TreeRow::Folder { path, .. } => Some(path.as_str()),
            _ => None,
        })
        .collect()
}

/// Rebuild the rows after a state change.
///
/// Drops open state of directories that went off screen, then applies the
/// auto-open rule, rebuilding once more if it opened something.
pub fn refresh_rows(store: &FileTreeStore, folders: &mut FolderStates) -> Vec<TreeRow> {
    let rows = build_rows(store, folders);

    let opened = {
        let displayed = displayed_folders(&rows);
        folders.retain_displayed(&displayed);
        folders.auto_open(store, &displayed)
    };

    if opened {
        build_rows(store, folders)
    } else {
        rows
    }
}
