use crate::config::{Config, UiConfig};
use crate::form::{Button, FormController, FormHost};
use crate::input::InputState;
use crate::layout::LayoutRegions;

/// Which widget has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    InputField,
    SuggestButton,
    ResetButton,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::InputField => Focus::SuggestButton,
            Focus::SuggestButton => Focus::ResetButton,
            Focus::ResetButton => Focus::InputField,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::InputField => Focus::ResetButton,
            Focus::SuggestButton => Focus::InputField,
            Focus::ResetButton => Focus::SuggestButton,
        }
    }

    /// The button under focus, if any
    pub fn button(self) -> Option<Button> {
        match self {
            Focus::InputField => None,
            Focus::SuggestButton => Some(Button::Suggest),
            Focus::ResetButton => Some(Button::Reset),
        }
    }
}

impl From<Button> for Focus {
    fn from(button: Button) -> Self {
        match button {
            Button::Suggest => Focus::SuggestButton,
            Button::Reset => Focus::ResetButton,
        }
    }
}

/// Widgets the form controller reads and writes
#[derive(Default)]
pub struct FormView {
    pub input: InputState,
    pub suggestion_label: String,
}

impl FormHost for FormView {
    fn input_text(&self) -> String {
        self.input.text().to_string()
    }

    fn set_label_text(&mut self, text: &str) {
        self.suggestion_label = text.to_string();
    }

    fn set_input_error(&mut self, message: Option<&str>) {
        self.input.error = message.map(str::to_string);
    }

    fn clear_input_text(&mut self) {
        self.input.clear();
    }
}

/// Application state
pub struct App {
    pub view: FormView,
    pub form: FormController,
    pub focus: Focus,
    pub ui: UiConfig,
    /// One-line notice shown in place of the help line
    pub status_message: Option<String>,
    pub layout_regions: LayoutRegions,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        log::debug!("App created");

        Self {
            view: FormView::default(),
            form: FormController::new(),
            focus: Focus::default(),
            ui: config.ui.clone(),
            status_message: None,
            layout_regions: LayoutRegions::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn input_text(&self) -> &str {
        self.view.input.text()
    }

    /// Append a notice to the status line
    pub fn add_status(&mut self, message: String) {
        self.status_message = Some(match self.status_message.take() {
            Some(existing) => format!("{} | {}", existing, message),
            None => message,
        });
    }

    /// Press a form button
    pub fn press(&mut self, button: Button) {
        log::debug!("{} button pressed", button.label());
        self.form.on_button_pressed(button, &mut self.view);

        if button == Button::Reset {
            self.focus = Focus::InputField;
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
