//! View and UI layer
//!
//! Display state derived from the store plus the ratatui renderers.

pub mod file_tree;
pub mod icons;
pub mod name_input;
pub mod theme;
pub mod ui;
