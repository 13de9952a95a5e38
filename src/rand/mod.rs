//! Randomness sources for password composition.

mod source;

pub use source::{RngSource, Shared};

use std::fmt;

use ::rand::rngs::{OsRng, StdRng};
use ::rand::{SeedableRng, thread_rng};

use crate::pass::CharacterPool;

/// Uniform draws the composer needs, independent of the generator behind them.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass zero.
    fn below(&mut self, len: usize) -> usize;

    /// Pick one word uniformly, or `None` when there is nothing to pick from.
    fn choose<'a>(&mut self, words: &[&'a str]) -> Option<&'a str> {
        if words.is_empty() {
            return None;
        }
        Some(words[self.below(words.len())])
    }

    /// Append `n` characters drawn independently from `pool`, with replacement.
    fn draw(&mut self, pool: &CharacterPool, n: usize, out: &mut String) {
        let chars = pool.as_slice();
        out.extend((0..n).map(|_| chars[self.below(chars.len())]));
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, len: usize) -> usize {
        (**self).below(len)
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn below(&mut self, len: usize) -> usize {
        (**self).below(len)
    }
}

/// Which generator a run draws from, selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntropySource {
    /// Per-thread ChaCha generator seeded by the OS.
    #[default]
    Thread,
    /// Operating system CSPRNG for every draw.
    Os,
    /// Fixed seed; identical settings give identical passwords.
    Seeded(u64),
}

impl EntropySource {
    pub fn name(&self) -> &'static str {
        match self {
            EntropySource::Thread => "thread",
            EntropySource::Os => "os",
            EntropySource::Seeded(_) => "seeded",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EntropySource::Thread => "thread-local ChaCha12, reseeded from the OS",
            EntropySource::Os => "operating system CSPRNG",
            EntropySource::Seeded(_) => "fixed seed (reproducible, not secret)",
        }
    }

    /// Parse a persisted name. Seeds are never persisted.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "thread" => Some(EntropySource::Thread),
            "os" => Some(EntropySource::Os),
            _ => None,
        }
    }

    /// Next persisted source in menu order.
    pub fn toggled(&self) -> Self {
        match self {
            EntropySource::Thread => EntropySource::Os,
            EntropySource::Os | EntropySource::Seeded(_) => EntropySource::Thread,
        }
    }

    pub fn open(&self) -> Box<dyn RandomSource> {
        match *self {
            EntropySource::Thread => Box::new(RngSource::new(thread_rng())),
            EntropySource::Os => Box::new(RngSource::new(OsRng)),
            EntropySource::Seeded(seed) => Box::new(RngSource::new(StdRng::seed_from_u64(seed))),
        }
    }
}

impl fmt::Display for EntropySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntropySource::Seeded(seed) => write!(f, "seeded ({seed})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays scripted indices, wrapping each into range.
    pub struct Scripted {
        picks: Vec<usize>,
        pos: usize,
    }

    impl Scripted {
        pub fn new(picks: &[usize]) -> Self {
            Self {
                picks: picks.to_vec(),
                pos: 0,
            }
        }

        pub fn draws(&self) -> usize {
            self.pos
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, len: usize) -> usize {
            let pick = if self.picks.is_empty() {
                0
            } else {
                self.picks[self.pos % self.picks.len()]
            };
            self.pos += 1;
            pick % len
        }
    }
}
