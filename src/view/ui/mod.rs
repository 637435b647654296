//! Renderers for the three screen regions

pub mod file_explorer;
pub mod status_bar;
pub mod title_bar;

pub use file_explorer::{ExplorerContext, ExplorerHit, ExplorerLayout, FileExplorerRenderer};
pub use status_bar::StatusBarRenderer;
pub use title_bar::TitleBarRenderer;
