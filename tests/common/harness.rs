use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use filetree::app::App;
use filetree::config::Config;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Drives an `App` against ratatui's in-memory backend.
///
/// Every input helper renders afterwards, so layouts used for mouse hit
/// testing always match what the screen shows.
pub struct AppTestHarness {
    app: App,
    terminal: Terminal<TestBackend>,
}

impl AppTestHarness {
    pub fn new(width: u16, height: u16) -> anyhow::Result<Self> {
        Self::with_config(width, height, Config::default())
    }

    pub fn with_config(width: u16, height: u16, config: Config) -> anyhow::Result<Self> {
        super::tracing::init_tracing_from_env();
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut harness = Self {
            app: App::new(config),
            terminal,
        };
        harness.render()?;
        Ok(harness)
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let app = &mut self.app;
        self.terminal.draw(|frame| app.render(frame))?;
        Ok(())
    }

    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<()> {
        self.app.handle_key(KeyEvent::new(code, modifiers));
        self.render()
    }

    pub fn type_text(&mut self, text: &str) -> anyhow::Result<()> {
        for c in text.chars() {
            self.app
                .handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        self.render()
    }

    /// Create a file or folder through the keyboard: arm, type, submit
    pub fn create(&mut self, folder: bool, name: &str) -> anyhow::Result<()> {
        let key = if folder { 'N' } else { 'n' };
        self.send_key(KeyCode::Char(key), KeyModifiers::NONE)?;
        self.type_text(name)?;
        self.send_key(KeyCode::Enter, KeyModifiers::NONE)
    }

    fn mouse(&mut self, kind: MouseEventKind, col: u16, row: u16) -> anyhow::Result<()> {
        self.app.handle_mouse(MouseEvent {
            kind,
            column: col,
            row,
            modifiers: KeyModifiers::NONE,
        });
        self.render()
    }

    pub fn click(&mut self, col: u16, row: u16) -> anyhow::Result<()> {
        self.mouse(MouseEventKind::Down(MouseButton::Left), col, row)
    }

    /// Click the first occurrence of `text` on screen
    pub fn click_text(&mut self, text: &str) -> anyhow::Result<()> {
        let (col, row) = self
            .find_text(text)
            .ok_or_else(|| anyhow::anyhow!("'{}' not on screen:\n{}", text, self.screen_to_string()))?;
        self.click(col, row)
    }

    pub fn scroll(&mut self, down: bool, col: u16, row: u16) -> anyhow::Result<()> {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.mouse(kind, col, row)
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Screen position (column, row) of the first occurrence of `text`
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        let buffer = self.buffer();
        for y in 0..buffer.area.height {
            let mut line = String::new();
            let mut columns = Vec::new();
            for x in 0..buffer.area.width {
                let symbol = buffer[(x, y)].symbol();
                for _ in 0..symbol.len() {
                    columns.push(x);
                }
                line.push_str(symbol);
            }
            if let Some(byte) = line.find(text) {
                return Some((columns[byte], y));
            }
        }
        None
    }

    pub fn screen_row(&self, y: u16) -> String {
        let buffer = self.buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    pub fn screen_to_string(&self) -> String {
        let height = self.buffer().area.height;
        (0..height)
            .map(|y| self.screen_row(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen to not contain '{}'\nScreen:\n{}",
            text,
            screen
        );
    }
}
