use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Light or dark presentation
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    JsonSchema,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

impl ColorMode {
    pub fn toggled(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    /// Glyph of the toggle button: a sun while dark, a moon while light
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ColorMode::Light => "☾",
            ColorMode::Dark => "☀",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Light => write!(f, "light"),
            ColorMode::Dark => write!(f, "dark"),
        }
    }
}

/// Colors used by the title bar, explorer and status line
#[derive(Debug, Clone)]
pub struct Theme {
    pub mode: ColorMode,

    pub bg: Color,
    pub fg: Color,
    pub muted_fg: Color,

    pub title_fg: Color,
    pub button_fg: Color,

    pub header_bg: Color,
    pub header_fg: Color,

    pub folder_fg: Color,
    pub file_fg: Color,
    pub chevron_fg: Color,
    /// Background of the selected directory row
    pub selected_bg: Color,
    /// Background of the row under the keyboard cursor
    pub cursor_bg: Color,

    pub input_bg: Color,
    pub input_fg: Color,

    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            mode: ColorMode::Dark,
            bg: Color::Rgb(24, 24, 27),
            fg: Color::Rgb(228, 228, 231),
            muted_fg: Color::Rgb(113, 113, 122),
            title_fg: Color::Rgb(250, 250, 250),
            button_fg: Color::Rgb(250, 250, 250),
            header_bg: Color::Rgb(228, 228, 231),
            header_fg: Color::Rgb(24, 24, 27),
            folder_fg: Color::Rgb(125, 211, 252),
            file_fg: Color::Rgb(228, 228, 231),
            chevron_fg: Color::Yellow,
            selected_bg: Color::Rgb(63, 63, 70),
            cursor_bg: Color::Rgb(39, 39, 42),
            input_bg: Color::Rgb(250, 250, 250),
            input_fg: Color::Rgb(24, 24, 27),
            status_bar_bg: Color::Rgb(39, 39, 42),
            status_bar_fg: Color::Rgb(161, 161, 170),
        }
    }

    pub fn light() -> Self {
        Self {
            mode: ColorMode::Light,
            bg: Color::Rgb(250, 250, 250),
            fg: Color::Rgb(24, 24, 27),
            muted_fg: Color::Rgb(113, 113, 122),
            title_fg: Color::Rgb(9, 9, 11),
            button_fg: Color::Rgb(9, 9, 11),
            header_bg: Color::Rgb(24, 24, 27),
            header_fg: Color::Rgb(250, 250, 250),
            folder_fg: Color::Rgb(3, 105, 161),
            file_fg: Color::Rgb(39, 39, 42),
            chevron_fg: Color::Rgb(161, 98, 7),
            selected_bg: Color::Rgb(212, 212, 216),
            cursor_bg: Color::Rgb(228, 228, 231),
            input_bg: Color::Rgb(24, 24, 27),
            input_fg: Color::Rgb(250, 250, 250),
            status_bar_bg: Color::Rgb(228, 228, 231),
            status_bar_fg: Color::Rgb(82, 82, 91),
        }
    }

    pub fn from_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => Self::light(),
            ColorMode::Dark => Self::dark(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_mode(ColorMode::default())
    }
}
