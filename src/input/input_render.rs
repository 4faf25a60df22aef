//! Input field rendering
//!
//! Draws the time-of-day text field and the validation message below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::InputState;

/// Render the input field
pub fn render_field(input: &mut InputState, frame: &mut Frame, area: Rect, focused: bool, accent: Color) {
    // Red border while an error is shown, accent when focused
    let border_color = if input.has_error() {
        Color::Red
    } else if focused {
        accent
    } else {
        Color::DarkGray
    };

    input.textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Time of day ")
            .border_style(Style::default().fg(border_color)),
    );

    // Only show the cursor while the field has focus
    let cursor_style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&input.textarea, area);
}

/// Render the validation message under the input field
pub fn render_error(input: &InputState, frame: &mut Frame, area: Rect) {
    let Some(error) = &input.error else {
        return;
    };

    let paragraph = Paragraph::new(error.as_str())
        .style(Style::default().fg(Color::Red))
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

#[cfg(test)]
#[path = "input_render_tests.rs"]
mod input_render_tests;
