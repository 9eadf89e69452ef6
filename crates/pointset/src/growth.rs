//! Randomized cluster growth from a single seed cell.
//!
//! Model
//! - Start from an all-empty `size³` grid and fill one uniformly chosen seed.
//! - Repeat a random number of times: pick a filled center, walk the 26 full
//!   neighbors in a fresh random order, and fill each in-bounds one with a fixed
//!   probability.
//! - The grid is connected under 26-adjacency by construction.

use crate::grid::{Grid3, Point, FULL_OFFSETS};
use crate::rng::RandomSource;

/// Growth parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GrowthCfg {
    /// Grid side length is `base_size + difficulty`.
    pub base_size: usize,
    /// Lower bound (inclusive) of the iteration count.
    pub min_iterations: i64,
    /// Upper bound (inclusive) of the iteration count is `iteration_slack + difficulty`.
    pub iteration_slack: i64,
    /// Chance that a visited in-bounds neighbor gets filled.
    pub fill_probability: f64,
}

impl Default for GrowthCfg {
    fn default() -> Self {
        Self {
            base_size: 3,
            min_iterations: 3,
            iteration_slack: 5,
            fill_probability: 0.5,
        }
    }
}

impl GrowthCfg {
    #[inline]
    pub fn grid_size(&self, difficulty: u32) -> usize {
        self.base_size + difficulty as usize
    }
}

/// Grow a cluster for `difficulty` (assumed already validated).
pub fn build_grid<R: RandomSource + ?Sized>(
    difficulty: u32,
    cfg: &GrowthCfg,
    rng: &mut R,
) -> Grid3 {
    let size = cfg.grid_size(difficulty);
    let mut grid = Grid3::new(size);
    let hi = size as i64 - 1;
    let seed = Point::new(
        rng.uniform_int(0, hi) as usize,
        rng.uniform_int(0, hi) as usize,
        rng.uniform_int(0, hi) as usize,
    );
    grid.fill(seed);

    let iterations = rng.uniform_int(cfg.min_iterations, cfg.iteration_slack + difficulty as i64);
    for _ in 0..iterations {
        grow_step(&mut grid, cfg.fill_probability, rng);
    }
    tracing::debug!(
        size,
        iterations,
        filled = grid.count_filled(),
        "grew cluster"
    );
    grid
}

/// One growth iteration. Returns the chosen center, `None` if nothing is filled.
pub fn grow_step<R: RandomSource + ?Sized>(
    grid: &mut Grid3,
    fill_probability: f64,
    rng: &mut R,
) -> Option<Point> {
    let filled = grid.filled_points();
    let center = *rng.choice(&filled)?;
    let mut directions = FULL_OFFSETS;
    rng.shuffle(&mut directions);
    for d in directions {
        if let Some(q) = grid.checked_point(center.offset(d)) {
            if rng.uniform_float() < fill_probability {
                grid.fill(q);
            }
        }
    }
    Some(center)
}
