use crate::config::FileExplorerConfig;
use crate::model::CreateType;
use crate::view::file_tree::TreeRow;
use crate::view::icons::{folder_glyphs, FileIcon};
use crate::view::name_input::NameInputState;
use crate::view::theme::Theme;
use ratatui::{
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};
use rust_i18n::t;
use unicode_width::UnicodeWidthStr;

/// Everything the explorer needs to draw one frame
pub struct ExplorerContext<'a> {
    pub rows: &'a [TreeRow],
    /// Row under the keyboard cursor
    pub cursor: Option<usize>,
    pub scroll_offset: usize,
    pub name_input: &'a NameInputState,
    pub theme: &'a Theme,
    pub config: &'a FileExplorerConfig,
}

/// What a mouse position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerHit {
    NewFile,
    NewFolder,
    /// Header outside the buttons
    Header,
    /// Index into the full row list
    Row(usize),
    /// List area below the last row
    Background,
}

/// Screen areas of the last rendered explorer, used for mouse hit testing
#[derive(Debug, Clone, Default)]
pub struct ExplorerLayout {
    pub area: Rect,
    pub header: Rect,
    pub new_file_button: Rect,
    pub new_folder_button: Rect,
    pub list_area: Rect,
    pub scroll_offset: usize,
    pub row_count: usize,
}

impl ExplorerLayout {
    pub fn hit_test(&self, col: u16, row: u16) -> Option<ExplorerHit> {
        let pos = Position::new(col, row);
        if self.new_file_button.contains(pos) {
            return Some(ExplorerHit::NewFile);
        }
        if self.new_folder_button.contains(pos) {
            return Some(ExplorerHit::NewFolder);
        }
        if self.header.contains(pos) {
            return Some(ExplorerHit::Header);
        }
        if self.list_area.contains(pos) {
            let index = self.scroll_offset + (row - self.list_area.y) as usize;
            if index < self.row_count {
                return Some(ExplorerHit::Row(index));
            }
            return Some(ExplorerHit::Background);
        }
        None
    }

    /// Number of rows the list can show at once
    pub fn viewport_height(&self) -> usize {
        self.list_area.height as usize
    }
}

pub struct FileExplorerRenderer;

impl FileExplorerRenderer {
    /// Render the explorer header and row list into `area`
    pub fn render(frame: &mut Frame, area: Rect, ctx: &ExplorerContext) -> ExplorerLayout {
        let theme = ctx.theme;
        frame.render_widget(Block::default().style(Style::default().bg(theme.bg)), area);

        let header = Rect::new(area.x, area.y, area.width, area.height.min(1));
        let list_area = Rect::new(
            area.x,
            area.y.saturating_add(header.height),
            area.width,
            area.height.saturating_sub(header.height),
        );

        let (new_file_button, new_folder_button) = Self::render_header(frame, header, theme);

        let viewport_height = list_area.height as usize;
        // Rows may have shrunk since the offset was computed
        let scroll_offset = ctx.scroll_offset.min(ctx.rows.len());
        let visible_end = (scroll_offset + viewport_height).min(ctx.rows.len());

        let layout = ExplorerLayout {
            area,
            header,
            new_file_button,
            new_folder_button,
            list_area,
            scroll_offset,
            row_count: ctx.rows.len(),
        };

        if ctx.rows.is_empty() {
            let hint = Paragraph::new(Line::from(Span::styled(
                format!(" {}", t!("explorer.empty")),
                Style::default().fg(theme.muted_fg),
            )));
            frame.render_widget(hint, list_area);
            return layout;
        }

        let indent_width = ctx.config.indent_width as usize;
        let mut form_cursor = None;

        let items: Vec<ListItem> = ctx.rows[scroll_offset..visible_end]
            .iter()
            .enumerate()
            .map(|(viewport_idx, row)| {
                let prefix = " ".repeat(row.indent() * indent_width);
                match row {
                    TreeRow::Folder {
                        name,
                        open,
                        selected,
                        ..
                    } => Self::render_folder(prefix, name, *open, *selected, theme),
                    TreeRow::File { name, .. } => Self::render_file(prefix, name, theme),
                    TreeRow::Form { kind, .. } => {
                        let (item, input_col) =
                            Self::render_form(prefix, *kind, ctx.name_input, ctx.config, theme);
                        form_cursor = Some((input_col, viewport_idx));
                        item
                    }
                }
            })
            .collect();

        let list = List::new(items)
            .style(Style::default().bg(theme.bg).fg(theme.fg))
            .highlight_style(Style::default().bg(theme.cursor_bg));

        let mut list_state = ListState::default();
        if let Some(cursor) = ctx.cursor {
            if cursor >= scroll_offset && cursor < visible_end {
                list_state.select(Some(cursor - scroll_offset));
            }
        }

        frame.render_stateful_widget(list, list_area, &mut list_state);

        if let Some((input_col, viewport_idx)) = form_cursor {
            let x = list_area
                .x
                .saturating_add((input_col + ctx.name_input.cursor_column()) as u16);
            if x < list_area.right() {
                frame.set_cursor_position(Position::new(
                    x,
                    list_area.y + viewport_idx as u16,
                ));
            }
        }

        layout
    }

    /// Header line: title on the left, create buttons on the right.
    /// Returns the button rects.
    fn render_header(frame: &mut Frame, area: Rect, theme: &Theme) -> (Rect, Rect) {
        if area.height == 0 {
            return (Rect::default(), Rect::default());
        }

        let base = Style::default().bg(theme.header_bg).fg(theme.header_fg);
        let title = format!(" {}", t!("explorer.root"));
        let new_file = t!("explorer.new_file").to_string();
        let new_folder = t!("explorer.new_folder").to_string();

        let title_width = title.width() as u16;
        let file_width = new_file.width() as u16;
        let folder_width = new_folder.width() as u16;
        let buttons_width = file_width + 1 + folder_width + 1;
        let gap = area
            .width
            .saturating_sub(title_width)
            .saturating_sub(buttons_width);

        let line = Line::from(vec![
            Span::styled(title, base.add_modifier(Modifier::BOLD)),
            Span::styled(" ".repeat(gap as usize), base),
            Span::styled(new_file, base),
            Span::styled(" ", base),
            Span::styled(new_folder, base),
            Span::styled(" ", base),
        ]);
        frame.render_widget(Paragraph::new(line).style(base), area);

        let file_x = area.x + title_width + gap;
        let folder_x = file_x + file_width + 1;
        let clip = |x: u16, width: u16| Rect::new(x, area.y, width, 1).intersection(area);
        (clip(file_x, file_width), clip(folder_x, folder_width))
    }

    fn render_folder(
        prefix: String,
        name: &str,
        open: bool,
        selected: bool,
        theme: &Theme,
    ) -> ListItem<'static> {
        let (chevron, icon) = folder_glyphs(open);
        let mut name_style = Style::default().fg(theme.folder_fg);
        if selected {
            name_style = name_style.add_modifier(Modifier::BOLD);
        }

        let line = Line::from(vec![
            Span::raw(prefix),
            Span::styled(chevron, Style::default().fg(theme.chevron_fg)),
            Span::styled(icon, Style::default().fg(theme.folder_fg)),
            Span::styled(name.to_string(), name_style),
        ]);

        let item = ListItem::new(line);
        if selected {
            item.style(Style::default().bg(theme.selected_bg))
        } else {
            item
        }
    }

    fn render_file(prefix: String, name: &str, theme: &Theme) -> ListItem<'static> {
        let icon = FileIcon::for_name(name);
        ListItem::new(Line::from(vec![
            Span::raw(prefix),
            Span::styled(
                icon.glyph(),
                Style::default()
                    .fg(icon.color())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(name.to_string(), Style::default().fg(theme.file_fg)),
        ]))
    }

    /// Returns the item and the column where the input text starts
    fn render_form(
        prefix: String,
        kind: CreateType,
        input: &NameInputState,
        config: &FileExplorerConfig,
        theme: &Theme,
    ) -> (ListItem<'static>, usize) {
        let mut spans = vec![Span::raw(prefix)];
        match kind {
            CreateType::File => {
                let icon = FileIcon::Default;
                spans.push(Span::styled(icon.glyph(), Style::default().fg(icon.color())));
                spans.push(Span::raw(" "));
            }
            CreateType::Folder => {
                let (chevron, icon) = folder_glyphs(false);
                spans.push(Span::styled(chevron, Style::default().fg(theme.chevron_fg)));
                spans.push(Span::styled(icon, Style::default().fg(theme.folder_fg)));
            }
        }
        let input_col: usize = spans.iter().map(|s| s.content.width()).sum();

        // Leave room for the cursor after the last character
        let value_width = input.value.width();
        let field_width = (config.input_width as usize).max(value_width + 1);
        let padded = format!(
            "{}{}",
            input.value,
            " ".repeat(field_width - value_width)
        );
        spans.push(Span::styled(
            padded,
            Style::default().bg(theme.input_bg).fg(theme.input_fg),
        ));

        (ListItem::new(Line::from(spans)), input_col)
    }
}
