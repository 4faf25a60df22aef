use crate::error::ValidationError;
use crate::suggestion::TimeOfDay;

/// Points in the form lifecycle reported to a `FormObserver`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    SubmitPressed,
    /// Trimmed input as read from the host
    InputReceived(String),
    Matched(TimeOfDay),
    ValidationFailed(ValidationError),
    SuggestionDisplayed(&'static str),
    NoSuggestion,
    Reset,
}

/// Sink for form lifecycle events
pub trait FormObserver {
    fn on_event(&mut self, event: &FormEvent);
}

/// Forwards form events to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl FormObserver for LogObserver {
    fn on_event(&mut self, event: &FormEvent) {
        match event {
            FormEvent::SubmitPressed => log::debug!("Submit pressed"),
            FormEvent::InputReceived(input) => log::info!("Input received: '{}'", input),
            FormEvent::Matched(time_of_day) => {
                log::debug!("Matched '{}'", time_of_day.label())
            }
            FormEvent::ValidationFailed(ValidationError::Empty) => log::warn!("Input is empty"),
            FormEvent::ValidationFailed(ValidationError::UnknownTimeOfDay(input)) => {
                log::warn!("Invalid input: '{}'", input)
            }
            FormEvent::SuggestionDisplayed(text) => {
                log::info!("Displaying suggestion: '{}'", text)
            }
            FormEvent::NoSuggestion => log::info!("No valid suggestion to display"),
            FormEvent::Reset => log::debug!("Input and suggestion fields cleared"),
        }
    }
}
