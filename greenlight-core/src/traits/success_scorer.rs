//! SuccessScorer trait: the externally supplied success formula.
//!
//! The 0 to 100 score is computed outside the engine and treated as given.
//! The engine only averages scores and never defines the formula.

use crate::types::Show;

/// Provider of per-show success scores.
pub trait SuccessScorer: Send + Sync {
    /// Score for a show, `None` when the show is unscored.
    /// Must be deterministic for a given show.
    fn score(&self, show: &Show) -> Option<f64>;
}

/// Scorer that reads the score already present on the show attributes.
/// The default wiring when the backing store precomputes scores.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShowTableScorer;

impl SuccessScorer for ShowTableScorer {
    fn score(&self, show: &Show) -> Option<f64> {
        show.success_score
    }
}
