//! Mouse click handling
//!
//! Clicking a button presses it; clicking the input field focuses it.

use super::app_state::{App, Focus};
use crate::form::Button;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>) {
    match region {
        Some(Region::InputField) => app.focus = Focus::InputField,
        Some(Region::SuggestButton) => click_button(app, Button::Suggest),
        Some(Region::ResetButton) => click_button(app, Button::Reset),
        // Label and empty space: no behavior
        _ => {}
    }
}

fn click_button(app: &mut App, button: Button) {
    app.focus = Focus::from(button);
    app.press(button);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
