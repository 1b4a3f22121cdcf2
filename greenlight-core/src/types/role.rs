//! The fixed credit-role vocabulary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credited roles recognized by the analyzer.
///
/// Raw rows may carry arbitrary role strings; only these six enter role
/// breakdowns and significance scoring. Declaration order is the canonical
/// presentation order for breakdowns.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CreditRole {
    Creator,
    Writer,
    Director,
    ExecutiveProducer,
    Producer,
    Showrunner,
}

impl CreditRole {
    /// All recognized roles in canonical presentation order.
    pub const ALL: [CreditRole; 6] = [
        CreditRole::Creator,
        CreditRole::Writer,
        CreditRole::Director,
        CreditRole::ExecutiveProducer,
        CreditRole::Producer,
        CreditRole::Showrunner,
    ];

    /// Canonical name as it appears in credit rows.
    pub fn display_name(&self) -> &'static str {
        match self {
            CreditRole::Creator => "Creator",
            CreditRole::Writer => "Writer",
            CreditRole::Director => "Director",
            CreditRole::ExecutiveProducer => "Executive Producer",
            CreditRole::Producer => "Producer",
            CreditRole::Showrunner => "Showrunner",
        }
    }

    /// Parse a canonical role name. Matching is exact; strings outside the
    /// vocabulary return `None` and stay out of breakdowns.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|role| role.display_name() == raw)
    }
}

impl fmt::Display for CreditRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
