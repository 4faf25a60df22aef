use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::io;

use super::app_state::{App, Focus};
use super::mouse_click::handle_click;
use crate::form::Button;
use crate::layout::region_at;

impl App {
    /// Block for the next terminal event and apply it
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::SuggestButton | Focus::ResetButton => self.handle_button_key(key),
        }
    }

    /// Keys that work regardless of focus. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if ctrl => self.press(Button::Reset),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => return false,
        }
        true
    }

    fn handle_input_field_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            // Ctrl+M is Enter in the textarea; submit instead of adding a line
            KeyCode::Enter => self.press(Button::Suggest),
            KeyCode::Char('m') if ctrl => self.press(Button::Suggest),
            _ => {
                self.view.input.input(key);
            }
        }
    }

    fn handle_button_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(button) = self.focus.button() {
                    self.press(button);
                }
            }
            KeyCode::Left => self.focus = Focus::SuggestButton,
            KeyCode::Right => self.focus = Focus::ResetButton,
            KeyCode::Up => self.focus = Focus::InputField,
            _ => {}
        }
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.ui.mouse {
            return;
        }

        if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
            let region = region_at(&self.layout_regions, mouse.column, mouse.row);
            handle_click(self, region);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
