// Configuration type definitions

use ratatui::style::Color;
use serde::Deserialize;

/// Accent color for focused widgets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Cyan,
    Green,
    Magenta,
    Yellow,
    Blue,
}

impl Accent {
    pub fn color(self) -> Color {
        match self {
            Accent::Cyan => Color::Cyan,
            Accent::Green => Color::Green,
            Accent::Magenta => Color::Magenta,
            Accent::Yellow => Color::Yellow,
            Accent::Blue => Color::Blue,
        }
    }
}

fn default_true() -> bool {
    true
}

/// UI configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UiConfig {
    /// Capture mouse events so buttons can be clicked
    #[serde(default = "default_true")]
    pub mouse: bool,
    /// Show the key binding hint line
    #[serde(default = "default_true")]
    pub show_help: bool,
    #[serde(default)]
    pub accent: Accent,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            mouse: true,
            show_help: true,
            accent: Accent::Cyan,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}
