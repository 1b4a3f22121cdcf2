//! ReportEngine: orchestrates the full analytics pipeline.
//!
//! Stage order: partnerships → profiles → overlap → role signals →
//! stories → package suggestions → graph layout. Every stage is a pure
//! function of the index, so the engine holds no state between calls and
//! repeated runs on the same input produce identical reports.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use greenlight_core::config::GreenlightConfig;
use greenlight_core::traits::SuccessScorer;
use greenlight_core::types::Show;
use greenlight_layout::{Layout, LayoutEngine, RelationshipGraph};

use crate::credits::CreditIndex;
use crate::packaging::{PackageRanker, Suggestion};
use crate::partnerships::{PartnershipDetector, PartnershipResult};
use crate::relationships::{
    NetworkProfile, OverlapPair, RelationshipAnalyzer, RoleSignal, StudioProfile,
};
use crate::stories::{StoryClassifier, StoryLists};

/// Everything the dashboard renders, in one deterministic bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub partnerships: PartnershipResult,
    pub network_profiles: Vec<NetworkProfile>,
    pub studio_profiles: Vec<StudioProfile>,
    pub network_overlaps: Vec<OverlapPair>,
    pub studio_overlaps: Vec<OverlapPair>,
    pub role_signals: Vec<RoleSignal>,
    pub stories: StoryLists,
    pub suggestions: Vec<Suggestion>,
    pub graph: RelationshipGraph,
    pub layout: Layout,
}

/// The main analytics engine. Borrows the index and scorer, owns only
/// configuration; construct one per report.
pub struct ReportEngine<'a> {
    index: &'a CreditIndex,
    scorer: &'a dyn SuccessScorer,
    config: GreenlightConfig,
}

impl<'a> ReportEngine<'a> {
    pub fn new(
        index: &'a CreditIndex,
        scorer: &'a dyn SuccessScorer,
        config: GreenlightConfig,
    ) -> Self {
        Self {
            index,
            scorer,
            config,
        }
    }

    /// Detect two-person partnerships.
    pub fn partnerships(&self) -> PartnershipResult {
        PartnershipDetector::from_config(&self.config.analysis).detect(self.index)
    }

    /// Per-network talent profiles.
    pub fn network_profiles(&self) -> Vec<NetworkProfile> {
        self.analyzer().network_profiles(self.index)
    }

    /// Per-studio talent profiles.
    pub fn studio_profiles(&self) -> Vec<StudioProfile> {
        self.analyzer().studio_profiles(self.index)
    }

    /// Shared talent between qualifying networks.
    pub fn network_overlaps(&self) -> Vec<OverlapPair> {
        self.analyzer().network_overlaps(self.index)
    }

    /// Shared talent between qualifying studios.
    pub fn studio_overlaps(&self) -> Vec<OverlapPair> {
        self.analyzer().studio_overlaps(self.index)
    }

    /// Cross-network role outliers over already-computed profiles.
    pub fn role_signals(&self, profiles: &[NetworkProfile]) -> Vec<RoleSignal> {
        self.analyzer().role_signals(profiles)
    }

    /// Classify team and solo track records into story lists.
    pub fn stories(&self, partnerships: &PartnershipResult) -> StoryLists {
        StoryClassifier::new().classify(self.index, partnerships)
    }

    /// Ranked package suggestions over the full catalog.
    pub fn packages(&self) -> Vec<Suggestion> {
        PackageRanker::from_config(&self.config.analysis).suggest_all(self.index, self.scorer)
    }

    /// Ranked package suggestions scoped by a show filter.
    pub fn packages_where<F>(&self, filter: F) -> Vec<Suggestion>
    where
        F: Fn(&Show) -> bool,
    {
        PackageRanker::from_config(&self.config.analysis).suggest(self.index, self.scorer, filter)
    }

    /// Run every stage and bundle the results.
    pub fn dashboard_report(&self) -> DashboardReport {
        info!(
            creators = self.index.creator_count(),
            shows = self.index.show_count(),
            "building dashboard report"
        );

        let partnerships = self.partnerships();
        debug!(
            teams = partnerships.teams.len(),
            solo = partnerships.solo.len(),
            "partnerships detected"
        );

        let network_profiles = self.network_profiles();
        let studio_profiles = self.studio_profiles();
        let network_overlaps = self.network_overlaps();
        let studio_overlaps = self.studio_overlaps();
        let role_signals = self.role_signals(&network_profiles);
        let stories = self.stories(&partnerships);
        let suggestions = self.packages();

        // Graph nodes are the qualifying networks, sized by talent pool;
        // edges carry the shared-creator counts from the overlap pass.
        let pools: Vec<(String, usize)> = network_profiles
            .iter()
            .map(|p| (p.name.clone(), p.talent_size))
            .collect();
        let shared: Vec<(String, String, usize)> = network_overlaps
            .iter()
            .map(|o| (o.name_a.clone(), o.name_b.clone(), o.shared_count()))
            .collect();
        let layout_engine = LayoutEngine::new(self.config.layout.clone());
        let graph = layout_engine.build_graph(&pools, &shared);
        let layout = layout_engine.layout(&graph);

        info!(
            teams = partnerships.teams.len(),
            profiles = network_profiles.len() + studio_profiles.len(),
            stories = stories.len(),
            suggestions = suggestions.len(),
            nodes = graph.nodes.len(),
            "dashboard report complete"
        );

        DashboardReport {
            partnerships,
            network_profiles,
            studio_profiles,
            network_overlaps,
            studio_overlaps,
            role_signals,
            stories,
            suggestions,
            graph,
            layout,
        }
    }

    fn analyzer(&self) -> RelationshipAnalyzer {
        RelationshipAnalyzer::from_config(&self.config.analysis)
    }
}
