use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Single-line push button drawn as `[ Label ]`
pub struct ButtonWidget<'a> {
    label: &'a str,
    focused: bool,
    accent: Color,
}

impl<'a> ButtonWidget<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            accent: Color::Cyan,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }
}

/// Columns needed to draw a button with this label
pub fn button_width(label: &str) -> u16 {
    u16::try_from(label.width() + 4).unwrap_or(u16::MAX)
}

impl Widget for ButtonWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = if self.focused {
            Style::default()
                .fg(Color::Black)
                .bg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.accent)
        };

        Paragraph::new(Line::from(format!("[ {} ]", self.label)))
            .style(style)
            .render(area, buf);
    }
}

#[cfg(test)]
#[path = "button_tests.rs"]
mod button_tests;
