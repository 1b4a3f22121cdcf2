//! Trait seams for external collaborators.
//! The backing store and the success formula live outside the engine.

pub mod credit_source;
pub mod success_scorer;

pub use credit_source::{CreditSource, InMemorySource};
pub use success_scorer::{ShowTableScorer, SuccessScorer};
