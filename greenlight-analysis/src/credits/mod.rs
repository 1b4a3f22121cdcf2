//! Credit normalization and indexing.

pub mod index;

pub use index::CreditIndex;
