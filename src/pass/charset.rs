//! Character classes and the fill pool built from them.

use super::ValidationError;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// One group of characters that may be enabled for the random fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Uppercase,
    Digits,
    Special,
    Lowercase,
}

impl CharClass {
    pub fn chars(self) -> &'static str {
        match self {
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => PUNCTUATION,
            CharClass::Lowercase => LOWERCASE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Uppercase => "Uppercase (A-Z)",
            CharClass::Digits => "Numbers (0-9)",
            CharClass::Special => "Special Characters (@!#...)",
            CharClass::Lowercase => "Lowercase (a-z)",
        }
    }
}

/// The alphabet random fill characters are drawn from.
///
/// Characters keep the order their classes were appended in; a pool is never
/// empty once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterPool {
    chars: Vec<char>,
}

impl CharacterPool {
    /// Build the pool for a set of toggles. Lowercase is always appended last.
    pub fn build(uppercase: bool, digits: bool, special: bool) -> Result<Self, ValidationError> {
        let mut classes = Vec::with_capacity(4);
        if uppercase {
            classes.push(CharClass::Uppercase);
        }
        if digits {
            classes.push(CharClass::Digits);
        }
        if special {
            classes.push(CharClass::Special);
        }
        classes.push(CharClass::Lowercase);

        Self::from_classes(&classes)
    }

    /// Build a pool from exactly the given classes, in order.
    pub fn from_classes(classes: &[CharClass]) -> Result<Self, ValidationError> {
        let chars: Vec<char> = classes.iter().flat_map(|c| c.chars().chars()).collect();
        if chars.is_empty() {
            return Err(ValidationError::EmptyPool);
        }
        Ok(Self { chars })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_only_when_nothing_enabled() {
        let pool = CharacterPool::build(false, false, false).unwrap();
        assert_eq!(pool.len(), 26);
        assert!(pool.as_slice().iter().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn classes_are_appended_in_order() {
        let pool = CharacterPool::build(true, true, true).unwrap();
        assert_eq!(pool.len(), 26 + 10 + 32 + 26);
        assert_eq!(pool.get(0), Some('A'));
        assert_eq!(pool.get(26), Some('0'));
        assert_eq!(pool.get(36), Some('!'));
        assert_eq!(pool.get(pool.len() - 1), Some('z'));
    }

    #[test]
    fn special_is_ascii_punctuation() {
        assert_eq!(PUNCTUATION.len(), 32);
        assert!(PUNCTUATION.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn digits_without_uppercase() {
        let pool = CharacterPool::build(false, true, false).unwrap();
        assert!(pool.contains('7'));
        assert!(pool.contains('q'));
        assert!(!pool.contains('Q'));
        assert!(!pool.contains('#'));
    }

    #[test]
    fn no_classes_is_an_empty_pool() {
        assert_eq!(
            CharacterPool::from_classes(&[]),
            Err(ValidationError::EmptyPool)
        );
    }
}
