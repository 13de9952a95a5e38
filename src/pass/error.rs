//! Validation failures reported by the composer.

use thiserror::Error;

use super::MIN_LENGTH;

/// Why a generation request could not produce a password.
///
/// Every variant is recoverable: callers surface the message and let the
/// user fix the input. The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Password must be at least {} characters long!", MIN_LENGTH)]
    LengthTooShort { length: usize },

    #[error("Enter at least one favorite word!")]
    NoWordsProvided,

    #[error("Favorite word '{word}' is longer than the password length!")]
    WordTooLong { word: String, length: usize },

    #[error("Select at least one option for password generation!")]
    EmptyPool,

    #[error("Please enter a valid number!")]
    InvalidLengthFormat { input: String },

    /// The password buffer for this length cannot be allocated.
    #[error("Password length {length} is too large!")]
    LengthTooLarge { length: usize },
}

impl ValidationError {
    /// Short dialog-style title for the failure.
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::WordTooLong { .. } => "Too Long!",
            ValidationError::EmptyPool => "Invalid Selection",
            _ => "Invalid Input",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_form_dialogs() {
        assert_eq!(
            ValidationError::LengthTooShort { length: 3 }.to_string(),
            "Password must be at least 8 characters long!"
        );
        assert_eq!(
            ValidationError::WordTooLong {
                word: "giraffe".into(),
                length: 5
            }
            .to_string(),
            "Favorite word 'giraffe' is longer than the password length!"
        );
        assert_eq!(
            ValidationError::InvalidLengthFormat { input: "ten".into() }.to_string(),
            "Please enter a valid number!"
        );
        assert_eq!(
            ValidationError::LengthTooLarge { length: 99 }.to_string(),
            "Password length 99 is too large!"
        );
    }

    #[test]
    fn titles() {
        assert_eq!(ValidationError::NoWordsProvided.title(), "Invalid Input");
        assert_eq!(ValidationError::EmptyPool.title(), "Invalid Selection");
        assert_eq!(
            ValidationError::WordTooLong {
                word: "x".into(),
                length: 0
            }
            .title(),
            "Too Long!"
        );
    }
}
