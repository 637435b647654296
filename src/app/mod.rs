//! Application state and frame rendering
//!
//! `App` owns the store plus all view-side state (folder open flags, the
//! flattened rows, cursor and scroll position, the inline input) and turns
//! input into store calls. Explorer operations live in `file_explorer`, key
//! and mouse routing in `input_dispatch`.

mod file_explorer;
mod input_dispatch;

pub use input_dispatch::{action_for_key, Action};

use crate::config::Config;
use crate::store::FileTreeStore;
use crate::view::file_tree::{FolderStates, TreeRow};
use crate::view::name_input::NameInputState;
use crate::view::theme::{ColorMode, Theme};
use crate::view::ui::{
    ExplorerContext, ExplorerLayout, FileExplorerRenderer, StatusBarRenderer, TitleBarRenderer,
};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::widgets::Clear;
use ratatui::Frame;
use rust_i18n::t;

pub struct App {
    config: Config,
    store: FileTreeStore,
    folders: FolderStates,
    /// Flattened explorer rows, rebuilt after every state change
    rows: Vec<TreeRow>,
    /// Keyboard cursor, an index into `rows`
    cursor: usize,
    scroll_offset: usize,
    /// Explorer rows visible at once, known after the first render
    viewport_height: usize,
    name_input: NameInputState,
    theme: Theme,
    status_message: Option<String>,
    explorer_layout: ExplorerLayout,
    theme_button: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let theme = Theme::from_mode(config.theme);
        Self {
            config,
            store: FileTreeStore::new(),
            folders: FolderStates::new(),
            rows: Vec::new(),
            cursor: 0,
            scroll_offset: 0,
            viewport_height: 0,
            name_input: NameInputState::new(),
            theme,
            status_message: None,
            explorer_layout: ExplorerLayout::default(),
            theme_button: Rect::default(),
            should_quit: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &FileTreeStore {
        &self.store
    }

    pub fn folders(&self) -> &FolderStates {
        &self.folders
    }

    pub fn rows(&self) -> &[TreeRow] {
        &self.rows
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn name_input(&self) -> &NameInputState {
        &self.name_input
    }

    pub fn color_mode(&self) -> ColorMode {
        self.theme.mode
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn set_status_message(&mut self, message: String) {
        tracing::debug!("status: {}", message);
        self.status_message = Some(message);
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        tracing::info!("Quit requested");
        self.should_quit = true;
    }

    pub fn toggle_color_mode(&mut self) {
        let mode = self.theme.mode.toggled();
        self.theme = Theme::from_mode(mode);
        tracing::info!("Switched to {} mode", mode);
        self.set_status_message(t!("status.theme", mode = mode.to_string()).to_string());
    }

    fn render_file_explorer(&mut self, frame: &mut Frame, area: Rect) {
        let ctx = ExplorerContext {
            rows: &self.rows,
            cursor: (!self.rows.is_empty()).then_some(self.cursor),
            scroll_offset: self.scroll_offset,
            name_input: &self.name_input,
            theme: &self.theme,
            config: &self.config.file_explorer,
        };
        let layout = FileExplorerRenderer::render(frame, area, &ctx);
        self.explorer_layout = layout;
    }

    /// Draw the whole screen: title bar, explorer, status line
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, explorer_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.theme_button = TitleBarRenderer::render(frame, title_area, &self.theme);

        self.render_file_explorer(frame, explorer_area);
        let viewport_height = self.explorer_layout.viewport_height();
        if viewport_height != self.viewport_height {
            self.viewport_height = viewport_height;
            self.ensure_cursor_visible();
            // Redraw with the scroll offset fitted to the new height
            frame.render_widget(Clear, explorer_area);
            self.render_file_explorer(frame, explorer_area);
        }

        StatusBarRenderer::render(
            frame,
            status_area,
            self.status_message.as_deref(),
            self.config.file_explorer.show_hints,
            &self.theme,
        );
    }
}
