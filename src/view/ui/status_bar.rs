//! Status line at the bottom of the screen

use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use rust_i18n::t;

pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// Show the last status message, or the key hints when there is none
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        message: Option<&str>,
        show_hints: bool,
        theme: &Theme,
    ) {
        let text = match message {
            Some(message) => message.to_string(),
            None if show_hints => t!("status.hints").to_string(),
            None => String::new(),
        };

        let style = Style::default()
            .bg(theme.status_bar_bg)
            .fg(theme.status_bar_fg);
        let line = Line::from(Span::styled(format!(" {}", text), style));
        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
