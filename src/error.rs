use thiserror::Error;

/// Why user input could not be turned into a suggestion
///
/// The `Display` text is the message shown next to the input field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a time of day.")]
    Empty,

    #[error(
        "Invalid time. Use Morning, Mid-morning, Afternoon, Mid-afternoon, Dinner, or After Dinner."
    )]
    UnknownTimeOfDay(String),
}

/// Errors from the application plumbing around the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Logger setup failed: {0}")]
    Logger(String),

    #[error("No cache directory available for the log file")]
    NoCacheDir,
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logger(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
