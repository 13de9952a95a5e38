//! Password composition and output.

pub mod charset;
mod compose;
mod error;
pub mod output;
mod request;
pub mod strength;

pub use charset::{CharClass, CharacterPool};
pub use compose::{ComposedPassword, compose, split};
pub use error::ValidationError;
pub use output::{Batch, Sink, generate_batch};
pub use request::{GenerationRequest, normalize_words, parse_length};

/// Shortest password the composer accepts.
pub const MIN_LENGTH: usize = 8;
