// In-memory tree model
//
// Two node kinds (files and directories) hang off a root mapping. Nodes
// carry no parent links; everything is reached by walking a `/`-separated
// path down from the root.

pub mod filesystem;
pub mod node;

pub use filesystem::{join_path, path_segments, FileSystem, Insertion, PATH_SEPARATOR};
pub use node::{CreateType, Entries, Node};
