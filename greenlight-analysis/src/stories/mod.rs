//! Narrative classification of cross-network track records.

pub mod classifier;
pub mod types;

pub use classifier::StoryClassifier;
pub use types::{StoryLists, SuccessStory};
