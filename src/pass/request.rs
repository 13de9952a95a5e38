//! Generation requests and the input normalization they need.

use super::{CharacterPool, ValidationError};

/// Everything one call to [`compose`](super::compose) needs.
///
/// Built fresh from caller input for every generation and never mutated
/// afterwards. Lowercase letters are always part of the fill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub words: Vec<String>,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
}

impl GenerationRequest {
    /// Request with every optional class enabled, like a fresh form.
    pub fn new<I, S>(length: usize, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            length,
            words: words.into_iter().map(Into::into).collect(),
            include_uppercase: true,
            include_digits: true,
            include_special: true,
        }
    }

    /// Build from the raw text a form or command line provides.
    ///
    /// Only the shape of `length` is checked here; range checks happen when
    /// the request is composed.
    pub fn from_input(
        length: &str,
        words: &str,
        uppercase: bool,
        digits: bool,
        special: bool,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            length: parse_length(length)?,
            words: vec![words.to_string()],
            include_uppercase: uppercase,
            include_digits: digits,
            include_special: special,
        })
    }

    pub fn uppercase(mut self, on: bool) -> Self {
        self.include_uppercase = on;
        self
    }

    pub fn digits(mut self, on: bool) -> Self {
        self.include_digits = on;
        self
    }

    pub fn special(mut self, on: bool) -> Self {
        self.include_special = on;
        self
    }

    /// Candidate words after splitting, trimming and dropping blanks.
    pub fn candidates(&self) -> Vec<&str> {
        normalize_words(&self.words)
    }

    pub fn pool(&self) -> Result<CharacterPool, ValidationError> {
        CharacterPool::build(
            self.include_uppercase,
            self.include_digits,
            self.include_special,
        )
    }
}

/// Split every entry on commas, trim, and drop empty pieces.
///
/// Accepts either one comma-separated line or an already split list.
pub fn normalize_words<S: AsRef<str>>(raw: &[S]) -> Vec<&str> {
    raw.iter()
        .flat_map(|entry| entry.as_ref().split(','))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Parse a textual password length.
///
/// Surrounding whitespace and a leading sign are accepted. Anything else that
/// is not a whole number is `InvalidLengthFormat`; a negative number is
/// reported as too short.
pub fn parse_length(input: &str) -> Result<usize, ValidationError> {
    let invalid = || ValidationError::InvalidLengthFormat {
        input: input.to_string(),
    };

    let value: i64 = input.trim().parse().map_err(|_| invalid())?;
    if value < 0 {
        return Err(ValidationError::LengthTooShort { length: 0 });
    }
    usize::try_from(value).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_line_is_split_and_trimmed() {
        let raw = [" cat , dog,,  fish  ,"];
        assert_eq!(normalize_words(&raw), vec!["cat", "dog", "fish"]);
    }

    #[test]
    fn blank_entries_normalize_to_nothing() {
        let raw = ["", " ", ""];
        assert!(normalize_words(&raw).is_empty());
    }

    #[test]
    fn inner_spaces_and_case_survive() {
        let raw = ["Big Dog", "cAt"];
        assert_eq!(normalize_words(&raw), vec!["Big Dog", "cAt"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let raw = ["cat,cat"];
        assert_eq!(normalize_words(&raw), vec!["cat", "cat"]);
    }

    #[test]
    fn parse_length_accepts_padded_numbers() {
        assert_eq!(parse_length(" 12 "), Ok(12));
        assert_eq!(parse_length("+9"), Ok(9));
        assert_eq!(parse_length("0"), Ok(0));
    }

    #[test]
    fn parse_length_rejects_text() {
        for bad in ["", "ten", "12.5", "1e3", "99999999999999999999999"] {
            assert_eq!(
                parse_length(bad),
                Err(ValidationError::InvalidLengthFormat {
                    input: bad.to_string()
                }),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn negative_length_is_too_short() {
        assert_eq!(
            parse_length("-5"),
            Err(ValidationError::LengthTooShort { length: 0 })
        );
    }

    #[test]
    fn from_input_keeps_the_raw_word_line() {
        let req = GenerationRequest::from_input("12", "cat, dog", true, false, true).unwrap();
        assert_eq!(req.length, 12);
        assert_eq!(req.candidates(), vec!["cat", "dog"]);
        assert!(req.include_uppercase);
        assert!(!req.include_digits);
        assert!(req.include_special);
    }

    #[test]
    fn from_input_bad_length() {
        assert!(matches!(
            GenerationRequest::from_input("abc", "cat", true, true, true),
            Err(ValidationError::InvalidLengthFormat { .. })
        ));
    }

    #[test]
    fn builder_toggles() {
        let req = GenerationRequest::new(10, ["cat"])
            .uppercase(false)
            .digits(false)
            .special(false);
        assert_eq!(req.pool().unwrap().len(), 26);
    }
}
