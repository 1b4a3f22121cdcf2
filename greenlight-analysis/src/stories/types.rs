//! Output types for story classification.

use serde::{Deserialize, Serialize};

/// A track record worth telling: one actor (team or solo creator) and the
/// breadth of their catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessStory {
    /// Team label ("A & B") or solo creator name.
    pub label: String,
    /// Distinct shows in the actor's catalog.
    pub show_count: usize,
    /// Distinct networks the catalog spans.
    pub network_count: usize,
    /// The networks themselves, name order.
    pub networks: Vec<String>,
}

/// Classified stories. The two lists are disjoint: an actor lands in at
/// most one of them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoryLists {
    /// Proven multi-network track records.
    pub success_stories: Vec<SuccessStory>,
    /// Newer collaborations starting to cross network lines.
    pub emerging_collaborations: Vec<SuccessStory>,
}

impl StoryLists {
    /// Total stories across both lists.
    pub fn len(&self) -> usize {
        self.success_stories.len() + self.emerging_collaborations.len()
    }

    /// True when neither list has entries.
    pub fn is_empty(&self) -> bool {
        self.success_stories.is_empty() && self.emerging_collaborations.is_empty()
    }
}
