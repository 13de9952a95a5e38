//! Password generation settings.

mod file;

use crate::pass::{GenerationRequest, normalize_words};
use crate::rand::EntropySource;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub words: Vec<String>,
    pub include_uppercase: bool,
    pub include_digits: bool,
    pub include_special: bool,
    pub number_of_passwords: usize,
    pub output_file_path: String,
    pub entropy: EntropySource,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings)?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self)
    }

    pub fn path() -> std::path::PathBuf {
        file::get_path()
    }

    /// Request for one composition with these settings.
    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.pass_length,
            words: self.words.clone(),
            include_uppercase: self.include_uppercase,
            include_digits: self.include_digits,
            include_special: self.include_special,
        }
    }

    /// Replace the word list from a comma-separated line.
    pub fn set_words(&mut self, line: &str) {
        self.words = normalize_words(&[line])
            .into_iter()
            .map(String::from)
            .collect();
    }

    pub fn words_line(&self) -> String {
        self.words.join(", ")
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            words: Vec::new(),
            include_uppercase: true,
            include_digits: true,
            include_special: true,
            number_of_passwords: 1,
            output_file_path: String::new(),
            entropy: EntropySource::Thread,
            to_clipboard: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_mirrors_settings() {
        let mut settings = Settings {
            pass_length: 20,
            include_digits: false,
            ..Default::default()
        };
        settings.set_words(" cat,, Big Dog ");
        let req = settings.request();
        assert_eq!(req.length, 20);
        assert_eq!(req.words, vec!["cat", "Big Dog"]);
        assert!(req.include_uppercase);
        assert!(!req.include_digits);
        assert_eq!(settings.words_line(), "cat, Big Dog");
    }
}
