//! Cluster puzzle generator.
//!
//! Purpose
//! - Produce independent `PuzzleInstance`s: grow a grid, render it, pick the
//!   point of interest, and wrap question text, label, and grid snapshot.
//!
//! Why this design
//! - The generator owns its random source, so seeding it fixes a whole batch.
//! - `generate_replay` rebuilds one instance from a `(seed, index)` token
//!   without replaying the batch before it.

use crate::classification::Classification;
use crate::game::Game;
use crate::grid::Point;
use crate::growth::{build_grid, GrowthCfg};
use crate::puzzle::{Metadata, PuzzleInstance};
use crate::render::render_grid;
use crate::rng::{RandomSource, ReplayToken};
use crate::select::{select_point, SelectCfg};
use crate::verifier::AnswerVerifier;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::ops::RangeInclusive;

/// Name reported through [`Game::name`].
pub const GAME_NAME: &str = "PointSet";
pub const DEFAULT_QUESTION_COUNT: usize = 100;
pub const DEFAULT_DIFFICULTY: u32 = 1;
pub const DIFFICULTY_RANGE: RangeInclusive<u32> = 1..=10;

/// Error type for puzzle generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    InvalidArgument { reason: String },
    DegenerateSample { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateSample {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => f.write_str(reason),
            Self::DegenerateSample { reason } => write!(f, "degenerate sample: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Check `difficulty` before any grid work.
pub fn validate_difficulty(difficulty: u32) -> Result<(), GeneratorError> {
    if DIFFICULTY_RANGE.contains(&difficulty) {
        Ok(())
    } else {
        Err(GeneratorError::invalid("difficulty must be between 1 and 10"))
    }
}

/// Growth plus selection parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GeneratorCfg {
    pub growth: GrowthCfg,
    pub select: SelectCfg,
}

/// Question text around a rendered diagram.
pub fn question_text(diagram: &str, point: Point) -> String {
    format!(
        "Classify the given set of points in 3D space:\n\n{diagram}\n\n\
         Is the point {point} internal, boundary, or external?"
    )
}

/// Generator of 3D cluster classification puzzles.
pub struct ClusterGenerator<R: RandomSource = StdRng> {
    cfg: GeneratorCfg,
    rng: R,
    verifier: AnswerVerifier,
}

impl ClusterGenerator<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Rebuild a single instance from a replay token.
    pub fn generate_replay(
        cfg: &GeneratorCfg,
        token: ReplayToken,
        difficulty: u32,
    ) -> Result<PuzzleInstance, GeneratorError> {
        validate_difficulty(difficulty)?;
        build_instance(cfg, difficulty, &mut token.to_std_rng())
    }

    /// `count` instances, the i-th drawn from token `(seed, i)`.
    pub fn generate_seeded_batch(
        cfg: &GeneratorCfg,
        seed: u64,
        count: usize,
        difficulty: u32,
    ) -> Result<Vec<PuzzleInstance>, GeneratorError> {
        validate_difficulty(difficulty)?;
        (0..count as u64)
            .map(|index| build_instance(cfg, difficulty, &mut ReplayToken { seed, index }.to_std_rng()))
            .collect()
    }
}

impl<R: RandomSource> ClusterGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self::with_cfg(GeneratorCfg::default(), rng)
    }

    pub fn with_cfg(cfg: GeneratorCfg, rng: R) -> Self {
        Self {
            cfg,
            rng,
            verifier: AnswerVerifier::new(),
        }
    }

    pub fn cfg(&self) -> &GeneratorCfg {
        &self.cfg
    }

    /// One instance at `difficulty`.
    pub fn generate_one(&mut self, difficulty: u32) -> Result<PuzzleInstance, GeneratorError> {
        validate_difficulty(difficulty)?;
        build_instance(&self.cfg, difficulty, &mut self.rng)
    }

    /// `number_of_questions` independent instances at `difficulty`.
    pub fn generate(
        &mut self,
        number_of_questions: usize,
        difficulty: u32,
    ) -> Result<Vec<PuzzleInstance>, GeneratorError> {
        validate_difficulty(difficulty)?;
        let mut out = Vec::with_capacity(number_of_questions);
        for _ in 0..number_of_questions {
            out.push(build_instance(&self.cfg, difficulty, &mut self.rng)?);
        }
        Ok(out)
    }
}

fn build_instance<R: RandomSource + ?Sized>(
    cfg: &GeneratorCfg,
    difficulty: u32,
    rng: &mut R,
) -> Result<PuzzleInstance, GeneratorError> {
    let grid = build_grid(difficulty, &cfg.growth, rng);
    let diagram = render_grid(&grid);
    let (point, label): (Point, Classification) = select_point(&grid, &cfg.select, rng)
        .ok_or_else(|| GeneratorError::degenerate("grid has no empty cell for an external point"))?;
    tracing::debug!(%point, %label, difficulty, "selected point");
    Ok(PuzzleInstance::new(
        question_text(&diagram, point),
        label.as_str(),
        difficulty,
        Metadata::from_grid(&grid),
    ))
}

impl<R: RandomSource> Game for ClusterGenerator<R> {
    type Verifier = AnswerVerifier;
    type Error = GeneratorError;

    fn name(&self) -> &str {
        GAME_NAME
    }

    fn verifier(&self) -> &AnswerVerifier {
        &self.verifier
    }

    fn generate(
        &mut self,
        number_of_questions: usize,
        difficulty: u32,
    ) -> Result<Vec<PuzzleInstance>, GeneratorError> {
        ClusterGenerator::generate(self, number_of_questions, difficulty)
    }

    /// Extraction lives in [`AnswerVerifier`]; the game-level hook finds nothing.
    fn extract_answer(&self, _answer: &str) -> String {
        String::new()
    }
}

#[cfg(test)]
mod tests;
