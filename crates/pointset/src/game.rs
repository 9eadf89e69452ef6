//! Capabilities a harness drives: a game that produces puzzles and a verifier
//! that scores free-text answers against them.

use crate::puzzle::PuzzleInstance;

/// Scores an answer against a puzzle's ground truth.
pub trait Verifier {
    /// Never fails: internal faults count as "no match".
    fn verify(&self, instance: &PuzzleInstance, answer: &str) -> bool;

    /// Label found in `answer`, or `""` if none.
    fn extract_answer(&self, answer: &str) -> String;
}

/// A puzzle family.
pub trait Game {
    type Verifier: Verifier;
    type Error: std::error::Error;

    fn name(&self) -> &str;

    fn verifier(&self) -> &Self::Verifier;

    fn generate(
        &mut self,
        number_of_questions: usize,
        difficulty: u32,
    ) -> Result<Vec<PuzzleInstance>, Self::Error>;

    /// Game-level extraction hook.
    fn extract_answer(&self, answer: &str) -> String;

    fn verify(&self, instance: &PuzzleInstance, answer: &str) -> bool {
        self.verifier().verify(instance, answer)
    }
}
