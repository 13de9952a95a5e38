//! Passwords built around a word you can remember.
//!
//! [`pass::compose`] embeds one randomly chosen favorite word, unmodified, in
//! random characters drawn from the enabled character classes:
//!
//! ```
//! use wordpass::pass::{GenerationRequest, compose};
//! use wordpass::rand::EntropySource;
//!
//! let request = GenerationRequest::new(12, ["cat"]).special(false);
//! let mut rng = EntropySource::Os.open();
//! let password = compose(&request, &mut rng).unwrap();
//!
//! assert_eq!(password.len(), 12);
//! assert!(password.as_str().contains("cat"));
//! ```
//!
//! The rest of the crate is the command-line and interactive front end.

pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rand;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
