//! Curated surface for harness code.
//!
//! Prefer these re-exports over reaching into submodules; the submodule layout
//! may change.

// Grid model
pub use crate::grid::{classify, Cell, Grid3, Point, FACE_OFFSETS, FULL_OFFSETS};
// Randomness
pub use crate::rng::{RandomSource, ReplayToken};
// Pipeline stages
pub use crate::growth::{build_grid, grow_step, GrowthCfg};
pub use crate::render::{parse_diagram, render_grid, DiagramError};
pub use crate::select::{
    boundary_points, internal_points, select_point, select_point_with_draw, SelectCfg,
};
// Capabilities
pub use crate::classification::Classification;
pub use crate::game::{Game, Verifier};
pub use crate::generator::{
    question_text, validate_difficulty, ClusterGenerator, GeneratorCfg, GeneratorError,
    DEFAULT_DIFFICULTY, DEFAULT_QUESTION_COUNT, DIFFICULTY_RANGE, GAME_NAME,
};
pub use crate::puzzle::{Metadata, PuzzleInstance};
pub use crate::verifier::{AnswerVerifier, VerifyError};
