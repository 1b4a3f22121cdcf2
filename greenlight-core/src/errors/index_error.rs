//! Credit index errors.

use crate::types::ShowId;

/// Errors raised while building the credit index.
///
/// Construction fails fast rather than letting absent attributes propagate
/// into downstream ratios. A failed build aborts the affected report only.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    #[error("missing required column `{column}` in {context}")]
    MissingColumn { column: String, context: String },

    #[error("credit row for `{creator}` references unknown {show_id}")]
    UnknownShow { show_id: ShowId, creator: String },
}

impl IndexError {
    /// Convenience constructor for the missing-column case.
    pub fn missing_column(column: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingColumn {
            column: column.into(),
            context: context.into(),
        }
    }
}

/// Result alias for index construction and credit-source calls.
pub type IndexResult<T> = Result<T, IndexError>;
