//! Free-text answer verification.
//!
//! Extraction is plain case-insensitive substring search over English and
//! Russian stems, in a fixed priority order (internal, boundary, external). If
//! no stem appears anywhere, lines carrying an `answer:` / `ответ:` marker are
//! scanned with the same priority, first matching line wins.
//!
//! Normalization maps both the extracted label and the ground truth onto the
//! canonical lowercase names before comparison; it also accepts the
//! `поверхност` ("surface") stem for boundary.

use crate::classification::Classification;
use crate::game::Verifier;
use crate::puzzle::PuzzleInstance;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

const INTERNAL_STEMS: &[&str] = &["внутрен", "internal"];
const BOUNDARY_STEMS: &[&str] = &["гранич", "boundary"];
const BOUNDARY_NORMALIZE_STEMS: &[&str] = &["гранич", "boundary", "поверхност"];
const EXTERNAL_STEMS: &[&str] = &["внешн", "external"];
const ANSWER_MARKERS: &[&str] = &["ответ:", "answer:"];

#[inline]
fn contains_any(haystack: &str, stems: &[&str]) -> bool {
    stems.iter().any(|s| haystack.contains(s))
}

/// Priority scan over already lower-cased text.
fn scan_keywords(lower: &str) -> Option<Classification> {
    if contains_any(lower, INTERNAL_STEMS) {
        Some(Classification::Internal)
    } else if contains_any(lower, BOUNDARY_STEMS) {
        Some(Classification::Boundary)
    } else if contains_any(lower, EXTERNAL_STEMS) {
        Some(Classification::External)
    } else {
        None
    }
}

/// Fault raised while checking an answer. Never leaves [`Verifier::verify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    Panicked(String),
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Panicked(msg) => write!(f, "verification panicked: {msg}"),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Matches free-text answers against ground-truth labels.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnswerVerifier;

impl AnswerVerifier {
    pub fn new() -> Self {
        Self
    }

    /// Label named in `text`, `None` when nothing matches.
    pub fn extract_label(&self, text: &str) -> Option<Classification> {
        if text.is_empty() {
            return None;
        }
        scan_keywords(&text.to_lowercase()).or_else(|| {
            text.split('\n')
                .map(str::to_lowercase)
                .filter(|line| contains_any(line, ANSWER_MARKERS))
                .find_map(|line| scan_keywords(&line))
        })
    }

    /// Canonical lowercase label, or the lower-cased input if unrecognized.
    pub fn normalize(&self, label: &str) -> String {
        let lower = label.to_lowercase();
        if contains_any(&lower, INTERNAL_STEMS) {
            Classification::Internal.as_str().to_string()
        } else if contains_any(&lower, BOUNDARY_NORMALIZE_STEMS) {
            Classification::Boundary.as_str().to_string()
        } else if contains_any(&lower, EXTERNAL_STEMS) {
            Classification::External.as_str().to_string()
        } else {
            lower
        }
    }

    /// Compare the label extracted from `answer` with `ground_truth`.
    pub fn try_verify_label(&self, ground_truth: &str, answer: &str) -> Result<bool, VerifyError> {
        panic::catch_unwind(AssertUnwindSafe(|| {
            let extracted = self.extract_answer(answer);
            self.normalize(&extracted) == self.normalize(ground_truth)
        }))
        .map_err(|payload| {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());
            VerifyError::Panicked(msg)
        })
    }

    /// Like [`Self::try_verify_label`], with faults logged and scored as `false`.
    pub fn verify_label(&self, ground_truth: &str, answer: &str) -> bool {
        match self.try_verify_label(ground_truth, answer) {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(%err, "error in verification");
                false
            }
        }
    }
}

impl Verifier for AnswerVerifier {
    fn verify(&self, instance: &PuzzleInstance, answer: &str) -> bool {
        self.verify_label(instance.answer(), answer)
    }

    fn extract_answer(&self, answer: &str) -> String {
        self.extract_label(answer)
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    }
}
