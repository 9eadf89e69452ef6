//! Puzzle container handed to a harness.

use crate::grid::Grid3;
use serde::{Deserialize, Serialize};

/// Grid snapshot carried alongside each question.
///
/// Serializes as `{"grid": [[["X", "."], ...]], "grid_size": n}` with
/// `grid[x][y][z]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub grid: Vec<Vec<Vec<String>>>,
    pub grid_size: usize,
}

impl Metadata {
    pub fn from_grid(grid: &Grid3) -> Self {
        Self {
            grid: grid.to_nested(),
            grid_size: grid.size(),
        }
    }
}

/// One generated question with its ground truth. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PuzzleInstance {
    question: String,
    answer: String,
    difficulty: u32,
    metadata: Metadata,
}

impl PuzzleInstance {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        difficulty: u32,
        metadata: Metadata,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            difficulty,
            metadata,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// Ground-truth label.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}
