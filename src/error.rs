//! Crate-level error type and `Result` alias for structured error handling.
//! Covers the resolution failures (missing value, conversion, ambiguous value),
//! typed-access failures on a resolved set, the global store lifecycle, and the
//! help short-circuit, which travels as an error so that it always wins.
use thiserror::Error;

use crate::core::help::HelpListing;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Missing value for setting '{alias}'")]
    MissingValue { alias: String },

    #[error("Failed to parse the value '{raw}' (should be {expected})")]
    Conversion { raw: String, expected: String },

    #[error("Help requested")]
    HelpRequested(HelpListing),

    #[error("Ambiguous value for setting '{alias}': '{value}' is itself an option")]
    AmbiguousValue { alias: String, value: String },

    #[error("Unknown setting: {name}")]
    UnknownSetting { name: String },

    #[error("Setting '{name}' holds {actual}, not {expected}")]
    KindMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Argument store used before initialization")]
    Uninitialized,

    #[error("Argument store already initialized")]
    AlreadyInitialized,
}

impl Error {
    pub fn conversion(raw: &str, expected: impl Into<String>) -> Self {
        Error::Conversion {
            raw: raw.to_string(),
            expected: expected.into(),
        }
    }

    /// True for the help short-circuit, which is not a failure.
    pub fn is_help(&self) -> bool {
        matches!(self, Error::HelpRequested(_))
    }

    /// Status the process should exit with: 0 for a help request, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_help() { 0 } else { 1 }
    }

    /// Print the help listing to stdout, or the error to stderr, then terminate
    /// the process with [`Error::exit_code`].
    pub fn exit(&self) -> ! {
        match self {
            Error::HelpRequested(listing) => print!("{listing}"),
            other => eprintln!("error: {other}"),
        }
        std::process::exit(self.exit_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::MissingValue {
            alias: "--height".to_string(),
        };
        assert_eq!(err.to_string(), "Missing value for setting '--height'");

        let err = Error::conversion("abc", "an integer");
        assert_eq!(
            err.to_string(),
            "Failed to parse the value 'abc' (should be an integer)"
        );
    }

    #[test]
    fn help_exits_successfully() {
        let help = Error::HelpRequested(HelpListing::default());
        assert!(help.is_help());
        assert_eq!(help.exit_code(), 0);
        assert_eq!(Error::Uninitialized.exit_code(), 1);
        assert_eq!(Error::conversion("x", "a float").exit_code(), 1);
    }
}
