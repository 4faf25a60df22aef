/// Which outcome the form is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    ShowingSuggestion,
    ShowingError,
}

/// Last submitted input and its outcome
///
/// At most one of the suggestion and the error message is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    raw_input: String,
    displayed_suggestion: String,
    error_message: String,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn displayed_suggestion(&self) -> &str {
        &self.displayed_suggestion
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    pub fn phase(&self) -> FormPhase {
        if !self.displayed_suggestion.is_empty() {
            FormPhase::ShowingSuggestion
        } else if !self.error_message.is_empty() {
            FormPhase::ShowingError
        } else {
            FormPhase::Idle
        }
    }

    pub(crate) fn show_suggestion(&mut self, raw_input: String, suggestion: &str) {
        self.raw_input = raw_input;
        self.displayed_suggestion = suggestion.to_string();
        self.error_message.clear();
    }

    pub(crate) fn show_error(&mut self, raw_input: String, message: String) {
        self.raw_input = raw_input;
        self.displayed_suggestion.clear();
        self.error_message = message;
    }

    pub(crate) fn clear(&mut self) {
        self.raw_input.clear();
        self.displayed_suggestion.clear();
        self.error_message.clear();
    }
}
