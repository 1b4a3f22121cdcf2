//! Graph layout errors.

/// Errors raised by the stress-minimizing layout.
///
/// `NonConvergence` is caught inside the layout engine and resolved by the
/// spring fallback; callers never see it.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error(
        "stress layout failed to converge after {iterations} iterations \
         (residual {residual})"
    )]
    NonConvergence { iterations: usize, residual: f64 },

    #[error("stress layout produced a non-finite coordinate for node `{node}`")]
    DegenerateCoordinate { node: String },
}
