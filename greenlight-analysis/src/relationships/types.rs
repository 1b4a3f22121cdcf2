//! Relationship aggregation output types.

use serde::{Deserialize, Serialize};

use greenlight_core::types::CreditRole;

/// Share of a talent pool holding one vocabulary role.
///
/// A creator counts once per role no matter how many shows they hold it on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleBreakdown {
    pub role: CreditRole,
    /// Creators in the pool holding the role.
    pub count: usize,
    /// Percentage of the pool, 0 to 100.
    pub percentage: f64,
}

/// A creator present in more than one network's (or studio's) talent pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharedCreator {
    pub name: String,
    /// Raw role strings across the creator's full catalog, sorted.
    pub roles: Vec<String>,
    /// Every network (or studio) the creator works across, sorted.
    pub affiliations: Vec<String>,
}

/// Shared talent between two networks or two studios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlapPair {
    pub name_a: String,
    pub name_b: String,
    /// Creators in both pools, sorted by name.
    pub shared: Vec<SharedCreator>,
}

impl OverlapPair {
    /// Number of creators the two pools share.
    pub fn shared_count(&self) -> usize {
        self.shared.len()
    }
}

/// One genre's (or subgenre's) slice of a network's output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreShare {
    pub genre: String,
    pub show_count: usize,
    /// Fraction of the network's shows, 0 to 1.
    pub share: f64,
}

/// A role percentage flagged as a cross-network outlier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSignal {
    pub network: String,
    pub role: CreditRole,
    /// The network's percentage for the role, 0 to 100.
    pub percentage: f64,
    /// Z-score against the cross-network distribution for the role.
    pub z_score: f64,
}

/// Talent-pool statistics for one network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub name: String,
    pub total_shows: usize,
    /// Distinct creators credited on the network's shows.
    pub talent_size: usize,
    /// Vocabulary roles present in the pool, in vocabulary order.
    pub role_breakdown: Vec<RoleBreakdown>,
    /// Creators whose every show is on this network, sorted.
    pub exclusive_talent: Vec<String>,
    /// Creators also working elsewhere, sorted by name.
    pub shared_talent: Vec<SharedCreator>,
    /// Genres strictly above the major-share threshold.
    pub major_genres: Vec<GenreShare>,
    /// Subgenres strictly above the threshold; unset subgenres contribute
    /// nothing.
    pub major_subgenres: Vec<GenreShare>,
}

impl NetworkProfile {
    /// Major-category count used as the diversity score.
    pub fn diversity_score(&self) -> usize {
        self.major_genres.len()
    }
}

/// Talent-pool statistics for one studio.
///
/// Mirrors `NetworkProfile` over the show-to-studios mapping; a show
/// credits every studio in its set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioProfile {
    pub name: String,
    pub total_shows: usize,
    pub talent_size: usize,
    pub role_breakdown: Vec<RoleBreakdown>,
    /// Creators whose every show credits this studio, sorted.
    pub exclusive_talent: Vec<String>,
    pub shared_talent: Vec<SharedCreator>,
    pub major_genres: Vec<GenreShare>,
    pub major_subgenres: Vec<GenreShare>,
}

impl StudioProfile {
    /// Major-category count used as the diversity score.
    pub fn diversity_score(&self) -> usize {
        self.major_genres.len()
    }
}
