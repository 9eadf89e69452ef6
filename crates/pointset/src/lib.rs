//! Point-set classification puzzles.
//!
//! A puzzle is a 3D cluster of filled cells grown from a single seed, drawn as a
//! layered ASCII diagram, plus one point of interest that the reader must label
//! `internal`, `boundary`, or `external`. The verifier side reads free-form
//! answers (English or Russian keywords) and checks them against the label.
//!
//! Layout
//! - `grid`: occupancy grid, points, neighbor tables, per-point classification.
//! - `growth`: randomized cluster growth from a seed cell.
//! - `render`: layered diagram text (and its parser).
//! - `select`: weighted choice of the point of interest.
//! - `generator`, `verifier`: the two capabilities a harness consumes.
//!
//! All randomness flows through [`rng::RandomSource`], so seeding a `StdRng`
//! makes every draw reproducible.

pub mod api;
pub mod classification;
pub mod game;
pub mod generator;
pub mod grid;
pub mod growth;
pub mod puzzle;
pub mod render;
pub mod rng;
pub mod select;
pub mod verifier;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use classification::Classification;
pub use generator::{ClusterGenerator, GeneratorError};
pub use grid::{Cell, Grid3, Point};
pub use puzzle::{Metadata, PuzzleInstance};
pub use verifier::AnswerVerifier;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::classification::Classification;
    pub use crate::game::{Game, Verifier};
    pub use crate::generator::{
        ClusterGenerator, GeneratorCfg, GeneratorError, DEFAULT_DIFFICULTY,
        DEFAULT_QUESTION_COUNT,
    };
    pub use crate::grid::{Cell, Grid3, Point};
    pub use crate::puzzle::{Metadata, PuzzleInstance};
    pub use crate::rng::{RandomSource, ReplayToken};
    pub use crate::verifier::AnswerVerifier;
}
