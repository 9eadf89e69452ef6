//! Random source used by growth and selection (plus replay tokens).
//!
//! Purpose
//! - Keep every random draw behind one small capability so callers can inject a
//!   seeded engine and get byte-identical puzzles back.
//!
//! Model
//! - `RandomSource` is implemented for every `rand::Rng`; `StdRng` is the default.
//! - A replay token `(seed, index)` is mixed into a single `StdRng`, so the n-th
//!   puzzle of a seeded batch can be rebuilt on its own.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Random draws needed by the generator.
pub trait RandomSource {
    /// Uniform in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;
    /// Uniform in `[lo, hi]` (inclusive). `hi < lo` is treated as `lo`.
    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64;
    /// Uniform element of `items`, `None` if empty.
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
    /// Uniform in-place permutation.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_float(&mut self) -> f64 {
        self.gen::<f64>()
    }

    #[inline]
    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        self.gen_range(lo..=hi.max(lo))
    }

    #[inline]
    fn choice<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }

    #[inline]
    fn shuffle<T>(&mut self, items: &mut [T]) {
        SliceRandom::shuffle(items, self);
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next puzzle in the same batch.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}
