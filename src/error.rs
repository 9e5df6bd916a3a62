//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Message shown to the user for every failure that is not about the input file itself.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing the data.";

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// The traffic history file does not exist.
    #[error("File \"{}\" does not exist.\nPlease ensure the file is in the same directory as this program.", .0.display())]
    FileNotFound(PathBuf),

    /// The traffic history path exists but is not a regular file.
    #[error("File \"{}\" is not a file.\nPlease ensure the file is in the same directory as this program.", .0.display())]
    NotAFile(PathBuf),

    /// A data line could not be parsed. `line` is 1-based.
    #[error("Parse Error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// Standard input ended before a valid sort choice was entered.
    #[error("Input closed before a sort order was chosen")]
    InputClosed,

    /// Error related to standard I/O operations.
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from user interaction prompts (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),
}

impl AppError {
    /// True for the errors that describe a problem with the input file path.
    pub fn is_input_file_error(&self) -> bool {
        matches!(self, AppError::FileNotFound(_) | AppError::NotAFile(_))
    }

    /// The message printed by the top-level handler.
    ///
    /// Input file problems get their descriptive message; everything else is
    /// reported generically and only detailed in the logs.
    pub fn user_message(&self) -> String {
        if self.is_input_file_error() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Dialoguer(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        let err = AppError::FileNotFound(PathBuf::from("history_traffic.dat"));
        let msg = err.user_message();
        assert!(msg.starts_with("File \"history_traffic.dat\" does not exist."));
        assert!(msg.ends_with("Please ensure the file is in the same directory as this program."));
    }

    #[test]
    fn test_not_a_file_message() {
        let err = AppError::NotAFile(PathBuf::from("some_dir"));
        assert!(err.is_input_file_error());
        assert!(err.user_message().contains("is not a file."));
    }

    #[test]
    fn test_other_errors_are_generic() {
        let parse = AppError::Parse {
            line: 3,
            reason: "missing '/'".to_string(),
        };
        assert_eq!(parse.to_string(), "Parse Error on line 3: missing '/'");
        assert_eq!(parse.user_message(), GENERIC_FAILURE_MESSAGE);

        let io: AppError = std::io::Error::new(std::io::ErrorKind::Other, "boom").into();
        assert!(!io.is_input_file_error());
        assert_eq!(io.user_message(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(AppError::InputClosed.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
