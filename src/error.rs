//! Error types for dateconv

use thiserror::Error;

/// Main error type for dateconv
#[derive(Debug, Error)]
pub enum DateConvError {
    #[error("Invalid input format '{format}': {source}")]
    InvalidInputFormat {
        format: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

impl DateConvError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DateConvError::Usage(_) => 2,
            DateConvError::InvalidInputFormat { .. } => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DateConvError::InvalidInputFormat { format, source } => {
                format!(
                    "Invalid input format: '{}'\n{}\n\n\
                    Suggestions:\n\
                    • Run 'dateconv --help' to see the available format tags\n\
                    • Quote the format so the shell passes it as one argument",
                    format, source
                )
            }
            DateConvError::Io(e) => {
                format!(
                    "IO error: {}\n\n\
                    Suggestions:\n\
                    • Check that the input file exists and is readable UTF-8 text\n\
                    • Check that the output directory exists and is writable",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DateConvError
pub type Result<T> = std::result::Result<T, DateConvError>;
