//! Detected two-person teams.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::show::ShowId;

/// A detected two-person partnership.
///
/// Members are stored in lexicographic order and the display label is
/// `"A & B"` in that same order. Shows and networks are the union of both
/// members' catalogs. A creator belongs to at most one team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub members: [String; 2],
    pub shows: BTreeSet<ShowId>,
    pub networks: BTreeSet<String>,
}

impl Team {
    /// Create a team from two members, normalizing member order.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        let members = if a <= b { [a, b] } else { [b, a] };
        Self {
            members,
            shows: BTreeSet::new(),
            networks: BTreeSet::new(),
        }
    }

    /// Display label, members in lexicographic order.
    pub fn label(&self) -> String {
        format!("{} & {}", self.members[0], self.members[1])
    }

    /// Whether the named creator is one of the two members.
    pub fn contains(&self, name: &str) -> bool {
        self.members[0] == name || self.members[1] == name
    }

    /// The other member's name, if `name` is a member.
    pub fn partner_of(&self, name: &str) -> Option<&str> {
        if self.members[0] == name {
            Some(&self.members[1])
        } else if self.members[1] == name {
            Some(&self.members[0])
        } else {
            None
        }
    }
}
