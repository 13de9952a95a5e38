//! Password composition: one favorite word wrapped in random fill.

use std::fmt;
use std::ops::Range;

use log::debug;
use zeroize::Zeroize;

use super::{GenerationRequest, MIN_LENGTH, ValidationError};
use crate::rand::RandomSource;

/// A finished password and where its embedded word sits.
///
/// Lengths and offsets count characters, not bytes. The text is wiped when
/// the value is dropped.
pub struct ComposedPassword {
    value: String,
    word: Range<usize>,
    pool_size: usize,
    candidates: usize,
}

impl ComposedPassword {
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Length in characters; always the requested length.
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Character range of the embedded word.
    pub fn word_span(&self) -> Range<usize> {
        self.word.clone()
    }

    pub fn word(&self) -> String {
        self.value
            .chars()
            .skip(self.word.start)
            .take(self.word.len())
            .collect()
    }

    pub fn left_fill_len(&self) -> usize {
        self.word.start
    }

    pub fn right_fill_len(&self) -> usize {
        self.len() - self.word.end
    }

    /// Characters drawn from the pool, left segment then right.
    pub fn fill(&self) -> impl Iterator<Item = char> + '_ {
        let span = self.word.clone();
        self.value
            .chars()
            .enumerate()
            .filter(move |(i, _)| !span.contains(i))
            .map(|(_, c)| c)
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// How many candidate words the embedded one was picked from.
    pub fn candidates(&self) -> usize {
        self.candidates
    }
}

impl Drop for ComposedPassword {
    fn drop(&mut self) {
        self.value.zeroize();
    }
}

impl fmt::Display for ComposedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl fmt::Debug for ComposedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedPassword")
            .field("value", &"<redacted>")
            .field("word", &self.word)
            .field("pool_size", &self.pool_size)
            .field("candidates", &self.candidates)
            .finish()
    }
}

/// Fill lengths on each side of a word. The right side takes the odd one.
pub fn split(length: usize, word_len: usize) -> (usize, usize) {
    let remaining = length - word_len;
    let left = remaining / 2;
    (left, remaining - left)
}

/// Compose one password for `request`, drawing from `rng`.
///
/// The word is picked before its length is checked, so a request whose
/// candidates differ in length may succeed on one call and fail on the next.
pub fn compose<R>(
    request: &GenerationRequest,
    rng: &mut R,
) -> Result<ComposedPassword, ValidationError>
where
    R: RandomSource + ?Sized,
{
    if request.length < MIN_LENGTH {
        return Err(ValidationError::LengthTooShort {
            length: request.length,
        });
    }

    let candidates = request.candidates();
    let word = rng
        .choose(&candidates)
        .ok_or(ValidationError::NoWordsProvided)?;

    let word_len = word.chars().count();
    if word_len > request.length {
        return Err(ValidationError::WordTooLong {
            word: word.to_string(),
            length: request.length,
        });
    }

    let pool = request.pool()?;
    let (left, right) = split(request.length, word_len);
    debug!(
        "composing: length={} candidates={} word_len={} pool={} fill={}+{}",
        request.length,
        candidates.len(),
        word_len,
        pool.len(),
        left,
        right
    );

    // Fill characters are single-byte ASCII.
    let too_large = || ValidationError::LengthTooLarge {
        length: request.length,
    };
    let bytes = (left + right).checked_add(word.len()).ok_or_else(too_large)?;
    let mut value = String::new();
    value.try_reserve_exact(bytes).map_err(|_| too_large())?;
    rng.draw(&pool, left, &mut value);
    value.push_str(word);
    rng.draw(&pool, right, &mut value);

    Ok(ComposedPassword {
        value,
        word: left..left + word_len,
        pool_size: pool.len(),
        candidates: candidates.len(),
    })
}
