use ratatui::crossterm::event::KeyEvent;
use ratatui::style::{Color, Style};
use tui_textarea::TextArea;

const PLACEHOLDER: &str = "Morning, Mid-morning, Afternoon, Mid-afternoon, Dinner, After Dinner";

/// Time-of-day input field and its error annotation
pub struct InputState {
    pub textarea: TextArea<'static>,
    pub error: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: new_textarea(),
            error: None,
        }
    }

    /// Get the current input text
    pub fn text(&self) -> &str {
        self.textarea.lines().first().map_or("", String::as_str)
    }

    /// Apply a key to the field, keeping it to a single line
    ///
    /// Returns true if the text changed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        let modified = self.textarea.input(key);
        if self.textarea.lines().len() > 1 {
            self.textarea.undo();
            return false;
        }
        modified
    }

    pub fn clear(&mut self) {
        self.textarea = new_textarea();
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn new_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();

    // Remove default underline from cursor line
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));

    textarea
}
