use super::form_state::FormState;
use super::host::{Button, FormHost};
use super::observer::{FormEvent, FormObserver, LogObserver};
use crate::suggestion::resolve;

/// Handles the Suggest and Reset buttons of the form
pub struct FormController<O = LogObserver> {
    state: FormState,
    observer: O,
}

impl FormController<LogObserver> {
    pub fn new() -> Self {
        Self::with_observer(LogObserver)
    }
}

impl Default for FormController<LogObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: FormObserver> FormController<O> {
    pub fn with_observer(observer: O) -> Self {
        Self {
            state: FormState::new(),
            observer,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Route a button press from the host to its transition
    pub fn on_button_pressed<H: FormHost + ?Sized>(&mut self, button: Button, host: &mut H) {
        match button {
            Button::Suggest => self.on_submit(host),
            Button::Reset => self.on_reset(host),
        }
    }

    /// Resolve the host's input and show either the suggestion or the error
    pub fn on_submit<H: FormHost + ?Sized>(&mut self, host: &mut H) {
        self.observer.on_event(&FormEvent::SubmitPressed);

        host.set_input_error(None);
        let raw_input = host.input_text();
        self.observer
            .on_event(&FormEvent::InputReceived(raw_input.trim().to_string()));

        match resolve(&raw_input) {
            Ok(suggestion) => {
                self.observer
                    .on_event(&FormEvent::Matched(suggestion.time_of_day));
                host.set_label_text(suggestion.text);
                self.state.show_suggestion(raw_input, suggestion.text);
                self.observer
                    .on_event(&FormEvent::SuggestionDisplayed(suggestion.text));
            }
            Err(err) => {
                let message = err.to_string();
                self.observer.on_event(&FormEvent::ValidationFailed(err));
                host.set_input_error(Some(&message));
                host.set_label_text("");
                self.state.show_error(raw_input, message);
                self.observer.on_event(&FormEvent::NoSuggestion);
            }
        }
    }

    /// Clear the input, the suggestion and any error
    pub fn on_reset<H: FormHost + ?Sized>(&mut self, host: &mut H) {
        host.clear_input_text();
        host.set_label_text("");
        host.set_input_error(None);
        self.state.clear();
        self.observer.on_event(&FormEvent::Reset);
    }
}
