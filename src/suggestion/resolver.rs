use super::table::{TableEntry, TimeOfDay, lookup};
use crate::error::ValidationError;

/// A resolved meal suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub time_of_day: TimeOfDay,
    pub text: &'static str,
}

impl From<&'static TableEntry> for Suggestion {
    fn from(entry: &'static TableEntry) -> Self {
        Self {
            time_of_day: entry.time_of_day,
            text: entry.suggestion,
        }
    }
}

/// Resolve raw user input into a suggestion
///
/// Leading and trailing whitespace is trimmed and the remainder is
/// lowercased before an exact table lookup. Internal whitespace is kept
/// as typed, so "after  dinner" does not match.
pub fn resolve(raw_input: &str) -> Result<Suggestion, ValidationError> {
    let trimmed = raw_input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    lookup(&trimmed.to_lowercase())
        .map(Suggestion::from)
        .ok_or_else(|| ValidationError::UnknownTimeOfDay(trimmed.to_string()))
}
