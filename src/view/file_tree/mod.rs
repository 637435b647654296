// Display model of the explorer: per-directory open state and the flat list
// of rows built from the store on every change.

pub mod folder_state;
pub mod rows;

pub use folder_state::FolderStates;
pub use rows::{build_rows, displayed_folders, refresh_rows, TreeRow};
