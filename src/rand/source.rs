use std::sync::{Arc, Mutex, PoisonError};

use ::rand::Rng;

use super::RandomSource;

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource(rng)
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    #[inline]
    fn below(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

/// One source shared by concurrent callers.
///
/// Every draw takes the lock, so interleaved callers each see uniform draws
/// but no ordering between callers is promised.
#[derive(Debug)]
pub struct Shared<S>(Arc<Mutex<S>>);

impl<S> Shared<S> {
    pub fn new(source: S) -> Self {
        Shared(Arc::new(Mutex::new(source)))
    }
}

impl<S> Clone for Shared<S> {
    fn clone(&self) -> Self {
        Shared(Arc::clone(&self.0))
    }
}

impl<S: RandomSource> RandomSource for Shared<S> {
    fn below(&mut self, len: usize) -> usize {
        // A poisoned source still holds a valid generator state.
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .below(len)
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use ::rand::SeedableRng;
    use ::rand::rngs::StdRng;

    use super::*;

    #[test]
    fn below_stays_in_range() {
        let mut rng = RngSource::new(StdRng::seed_from_u64(1));
        for len in 1..200 {
            assert!(rng.below(len) < len);
        }
        assert_eq!(rng.below(1), 0);
    }

    #[test]
    fn shared_source_serves_many_threads() {
        let shared = Shared::new(RngSource::new(StdRng::seed_from_u64(42)));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let mut rng = shared.clone();
                thread::spawn(move || (0..250).map(|_| rng.below(10)).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = [0usize; 10];
        for handle in handles {
            for n in handle.join().unwrap() {
                seen[n] += 1;
            }
        }
        assert_eq!(seen.iter().sum::<usize>(), 1000);
        assert!(seen.iter().all(|&count| count > 0));
    }
}
