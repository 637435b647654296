use crate::view::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use rust_i18n::t;
use unicode_width::UnicodeWidthStr;

/// Application title with the light/dark toggle on the right
pub struct TitleBarRenderer;

impl TitleBarRenderer {
    /// Render the title bar. Returns the area of the theme toggle button.
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) -> Rect {
        if area.height == 0 {
            return Rect::default();
        }

        let base = Style::default().bg(theme.bg).fg(theme.title_fg);
        let title = format!(" {}", t!("app.title"));
        let button = format!("[{}]", theme.mode.toggle_glyph());

        let title_width = title.width() as u16;
        let button_width = button.width() as u16;
        let gap = area
            .width
            .saturating_sub(title_width)
            .saturating_sub(button_width + 1);

        let line = Line::from(vec![
            Span::styled(title, base.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(gap as usize), base),
            Span::styled(button, Style::default().bg(theme.bg).fg(theme.button_fg)),
            Span::styled(" ", base),
        ]);
        frame.render_widget(Paragraph::new(line).style(base), area);

        Rect::new(area.x + title_width + gap, area.y, button_width, 1).intersection(area)
    }
}
