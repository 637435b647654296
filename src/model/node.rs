use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of node the inline form creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreateType {
    File,
    Folder,
}

impl fmt::Display for CreateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateType::File => write!(f, "file"),
            CreateType::Folder => write!(f, "folder"),
        }
    }
}

/// A node of the tree: a leaf file or a directory with named children
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    File { name: String },
    Directory { name: String, files: Entries },
}

impl Node {
    /// Create an empty node of the given kind
    pub fn new(kind: CreateType, name: impl Into<String>) -> Self {
        match kind {
            CreateType::File => Self::file(name),
            CreateType::Folder => Self::directory(name),
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Node::File { name: name.into() }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Node::Directory {
            name: name.into(),
            files: Entries::new(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::File { name } | Node::Directory { name, .. } => name,
        }
    }

    pub fn kind(&self) -> CreateType {
        match self {
            Node::File { .. } => CreateType::File,
            Node::Directory { .. } => CreateType::Folder,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Node::File { .. })
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }

    /// Children of a directory, `None` for a file
    pub fn files(&self) -> Option<&Entries> {
        match self {
            Node::Directory { files, .. } => Some(files),
            Node::File { .. } => None,
        }
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::File { name } => {
                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("isFile", &true)?;
                map.end()
            }
            Node::Directory { name, files } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("name", name)?;
                map.serialize_entry("isDirectory", &true)?;
                map.serialize_entry("files", files)?;
                map.end()
            }
        }
    }
}

/// Children of one directory level, keyed by path segment.
///
/// Keys are unique. Iteration follows insertion order; replacing an existing
/// key keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entries {
    items: Vec<(String, Node)>,
}

impl Entries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, node)| node)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        self.items
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, node)| node)
    }

    /// Insert `node` under `key`, returning the entry it replaced
    pub fn insert(&mut self, key: impl Into<String>, node: Node) -> Option<Node> {
        let key = key.into();
        if let Some(existing) = self.get_mut(&key) {
            return Some(std::mem::replace(existing, node));
        }
        self.items.push((key, node));
        None
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.items.iter().map(|(key, node)| (key.as_str(), node))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(key, _)| key.as_str())
    }
}

impl Serialize for Entries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (key, node) in &self.items {
            map.serialize_entry(key, node)?;
        }
        map.end()
    }
}
