use super::node::{Entries, Node};
use serde::Serialize;

/// Separator between segments of a tree path
pub const PATH_SEPARATOR: char = '/';

/// Split a tree path into its non-empty segments
pub fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split(PATH_SEPARATOR).filter(|segment| !segment.is_empty())
}

/// Join a child name onto an optional parent path.
///
/// An absent or empty parent yields the bare name.
pub fn join_path(parent: Option<&str>, name: &str) -> String {
    match parent {
        Some(parent) if !parent.is_empty() => format!("{parent}{PATH_SEPARATOR}{name}"),
        _ => name.to_string(),
    }
}

/// Result of placing a node into the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// A new entry was added
    Created,
    /// An existing sibling with the same key was overwritten
    Replaced,
    /// The target path did not resolve to a directory; nothing changed
    Unresolved,
}

impl Insertion {
    pub fn is_applied(self) -> bool {
        !matches!(self, Insertion::Unresolved)
    }
}

/// The root of the tree: top-level name to node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileSystem {
    root: Entries,
}

impl FileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level entries
    pub fn entries(&self) -> &Entries {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Look up the node at `path`, descending only through directories
    pub fn get(&self, path: &str) -> Option<&Node> {
        let mut segments = path_segments(path);
        let mut node = self.root.get(segments.next()?)?;
        for segment in segments {
            node = node.files()?.get(segment)?;
        }
        Some(node)
    }

    /// Whether `path` names an existing directory
    pub fn is_directory(&self, path: &str) -> bool {
        self.get(path).is_some_and(Node::is_dir)
    }

    /// Full path of the directory a create into `path` lands in.
    ///
    /// Segments are followed from the root. A segment that does not name a
    /// directory at the current level is skipped and the walk carries on from
    /// that level, so `nope/a` lands in `a`. The path resolves only when its
    /// last segment names a directory.
    pub fn resolve_directory(&self, path: &str) -> Option<String> {
        let segments = self.resolve_segments(path)?;
        Some(segments.join(PATH_SEPARATOR.to_string().as_str()))
    }

    /// The segments of `path` that descend into directories
    fn resolve_segments<'p>(&self, path: &'p str) -> Option<Vec<&'p str>> {
        let mut entries = &self.root;
        let mut resolved = Vec::new();
        let mut last_descended = false;

        for segment in path_segments(path) {
            match entries.get(segment) {
                Some(Node::Directory { files, .. }) => {
                    entries = files;
                    resolved.push(segment);
                    last_descended = true;
                }
                _ => last_descended = false,
            }
        }

        last_descended.then_some(resolved)
    }

    fn directory_entries_mut(&mut self, path: &str) -> Option<&mut Entries> {
        let segments = self.resolve_segments(path)?;

        let mut entries = &mut self.root;
        for segment in segments {
            entries = match entries.get_mut(segment) {
                Some(Node::Directory { files, .. }) => files,
                _ => return None,
            };
        }
        Some(entries)
    }

    /// Insert `node` under its own name, at the root when `parent` is `None`
    /// or inside the directory `parent` names.
    ///
    /// Never fails: an unresolvable parent leaves the tree untouched.
    pub fn insert(&mut self, parent: Option<&str>, node: Node) -> Insertion {
        let entries = match parent {
            None => &mut self.root,
            Some(path) => match self.directory_entries_mut(path) {
                Some(entries) => entries,
                None => return Insertion::Unresolved,
            },
        };

        let key = node.name().to_string();
        match entries.insert(key, node) {
            Some(_) => Insertion::Replaced,
            None => Insertion::Created,
        }
    }
}
