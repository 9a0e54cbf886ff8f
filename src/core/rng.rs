//! Seeded randomness for deck reshuffles and automated card picks.
//!
//! A match owns exactly one `GameRng`. Given the seed, every reshuffle and
//! every automated choice replays identically, which is what the tests
//! rely on.
//!
//! ```
//! use card_duel::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose_index(13), b.choose_index(13));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The match's random source.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from operating-system entropy.
    ///
    /// The drawn seed is kept, so an unseeded match can still be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index into `len` items, `None` when there are none.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.gen_range(0..len))
    }

    /// Fisher-Yates shuffle: every ordering is equally likely.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
