use ratatui::style::Color;

/// Icon shown in front of a file name, picked from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileIcon {
    Html,
    TypeScript,
    Json,
    ReactJsx,
    ReactTsx,
    Text,
    JavaScript,
    Default,
}

/// Text after the last `.`, or the whole name when there is none
pub fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

impl FileIcon {
    pub fn for_name(name: &str) -> Self {
        Self::for_extension(extension(name))
    }

    /// Case-sensitive: `TS` is not `ts`
    pub fn for_extension(ext: &str) -> Self {
        match ext {
            "html" => FileIcon::Html,
            "ts" => FileIcon::TypeScript,
            "json" => FileIcon::Json,
            "jsx" => FileIcon::ReactJsx,
            "tsx" => FileIcon::ReactTsx,
            "txt" => FileIcon::Text,
            "js" | "cjs" | "mjs" => FileIcon::JavaScript,
            _ => FileIcon::Default,
        }
    }

    /// Two-column badge
    pub fn glyph(self) -> &'static str {
        match self {
            FileIcon::Html => "<>",
            FileIcon::TypeScript => "TS",
            FileIcon::Json => "{}",
            FileIcon::ReactJsx => "JX",
            FileIcon::ReactTsx => "TX",
            FileIcon::Text => "≡ ",
            FileIcon::JavaScript => "JS",
            FileIcon::Default => "· ",
        }
    }

    pub fn color(self) -> Color {
        match self {
            FileIcon::Html => Color::LightRed,
            FileIcon::TypeScript => Color::Blue,
            FileIcon::Json => Color::Yellow,
            FileIcon::ReactJsx => Color::Cyan,
            FileIcon::ReactTsx => Color::LightBlue,
            FileIcon::Text => Color::Gray,
            FileIcon::JavaScript => Color::LightYellow,
            FileIcon::Default => Color::DarkGray,
        }
    }
}

/// Chevron and folder glyph for a directory row
pub fn folder_glyphs(open: bool) -> (&'static str, &'static str) {
    if open {
        ("▼ ", "📂 ")
    } else {
        ("▶ ", "📁 ")
    }
}
