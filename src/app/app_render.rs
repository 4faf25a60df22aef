use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::{App, Focus};
use crate::form::Button;
use crate::input::input_render;
use crate::widgets::button::{ButtonWidget, button_width};

const TITLE: &str = "Meal Suggestion";
const HELP_TEXT: &str = "Enter: suggest | Tab: next | Ctrl+R: reset | Esc: quit";

impl App {
    /// Render the UI and record widget regions for mouse handling
    pub fn render(&mut self, frame: &mut Frame) {
        let [title_area, input_area, error_area, buttons_area, label_area, footer_area] =
            Layout::vertical([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Input field with border
                Constraint::Length(2), // Validation message
                Constraint::Length(1), // Buttons
                Constraint::Min(3),    // Suggestion label
                Constraint::Length(1), // Help or status line
            ])
            .areas(frame.area());

        self.layout_regions.clear();

        let accent = self.ui.accent.color();

        self.render_title(frame, title_area);

        input_render::render_field(
            &mut self.view.input,
            frame,
            input_area,
            self.focus == Focus::InputField,
            accent,
        );
        input_render::render_error(&self.view.input, frame, error_area);
        self.layout_regions.input_field = Some(input_area);

        self.render_buttons(frame, buttons_area);
        self.render_suggestion(frame, label_area);
        self.render_footer(frame, footer_area);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            TITLE,
            Style::default()
                .fg(self.ui.accent.color())
                .add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, area);
    }

    fn render_buttons(&mut self, frame: &mut Frame, area: Rect) {
        let [suggest_area, _, reset_area, _] = Layout::horizontal([
            Constraint::Length(button_width(Button::Suggest.label())),
            Constraint::Length(2),
            Constraint::Length(button_width(Button::Reset.label())),
            Constraint::Min(0),
        ])
        .areas(area);

        let accent = self.ui.accent.color();
        for (button, button_area) in [(Button::Suggest, suggest_area), (Button::Reset, reset_area)] {
            let widget = ButtonWidget::new(button.label())
                .focused(self.focus.button() == Some(button))
                .accent(accent);
            frame.render_widget(widget, button_area);
        }

        self.layout_regions.suggest_button = Some(suggest_area);
        self.layout_regions.reset_button = Some(reset_area);
    }

    fn render_suggestion(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Suggestion ")
            .border_style(Style::default().fg(Color::DarkGray));

        let content = Paragraph::new(self.view.suggestion_label.as_str())
            .block(block)
            .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true });

        frame.render_widget(content, area);
        self.layout_regions.suggestion_label = Some(area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(status) = &self.status_message {
            Line::from(Span::styled(
                status.as_str(),
                Style::default().fg(Color::Yellow),
            ))
        } else if self.ui.show_help {
            Line::from(Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)))
        } else {
            return;
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
