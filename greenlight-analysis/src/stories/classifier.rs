//! Fixed-rule story classification.
//!
//! Actors are detected teams plus every creator left solo. Anyone whose
//! catalog sits on a single network is out of scope. The remaining actors
//! fall into exactly one bucket:
//!
//! - success story: 3+ shows across 3+ networks
//! - emerging collaboration: exactly 2 shows on 2+ networks, or
//!   3+ shows on exactly 2 networks

use std::collections::BTreeSet;

use tracing::debug;

use crate::credits::CreditIndex;
use crate::partnerships::PartnershipResult;

use super::types::{StoryLists, SuccessStory};

/// Classifies team and solo catalogs into story buckets.
///
/// The rules are part of the report contract and take no configuration.
#[derive(Debug, Default)]
pub struct StoryClassifier;

impl StoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify every actor into disjoint story lists.
    pub fn classify(&self, index: &CreditIndex, partnerships: &PartnershipResult) -> StoryLists {
        let mut lists = StoryLists::default();

        for team in &partnerships.teams {
            classify_actor(&mut lists, team.label(), team.shows.len(), &team.networks);
        }
        for creator in index.creators() {
            if partnerships.is_teamed(&creator.name) {
                continue;
            }
            classify_actor(
                &mut lists,
                creator.name.clone(),
                creator.shows.len(),
                &creator.networks,
            );
        }

        sort_stories(&mut lists.success_stories);
        sort_stories(&mut lists.emerging_collaborations);

        debug!(
            success = lists.success_stories.len(),
            emerging = lists.emerging_collaborations.len(),
            "stories classified"
        );
        lists
    }
}

fn classify_actor(
    lists: &mut StoryLists,
    label: String,
    show_count: usize,
    networks: &BTreeSet<String>,
) {
    let network_count = networks.len();
    if network_count < 2 {
        return;
    }
    let story = SuccessStory {
        label,
        show_count,
        network_count,
        networks: networks.iter().cloned().collect(),
    };
    if show_count >= 3 && network_count >= 3 {
        lists.success_stories.push(story);
    } else if (show_count == 2 && network_count >= 2)
        || (show_count >= 3 && network_count == 2)
    {
        lists.emerging_collaborations.push(story);
    }
}

/// Breadth first: networks, then shows, then label for a total order.
fn sort_stories(stories: &mut [SuccessStory]) {
    stories.sort_by(|a, b| {
        b.network_count
            .cmp(&a.network_count)
            .then_with(|| b.show_count.cmp(&a.show_count))
            .then_with(|| a.label.cmp(&b.label))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use greenlight_core::types::collections::FxHashMap;
    use greenlight_core::types::{CreditRow, Show, ShowId};

    use crate::partnerships::PartnershipDetector;

    fn classify(rows: Vec<CreditRow>, shows: Vec<Show>) -> StoryLists {
        let table: FxHashMap<ShowId, Show> =
            shows.into_iter().map(|s| (s.id, s)).collect();
        let index = CreditIndex::build(&rows, &table).unwrap();
        let partnerships = PartnershipDetector::new(3, 0.8).detect(&index);
        StoryClassifier::new().classify(&index, &partnerships)
    }

    fn show(id: u64, title: &str, network: &str) -> Show {
        Show::new(ShowId::new(id), title, network, "Drama")
    }

    #[test]
    fn test_solo_creator_with_three_networks_is_success_story() {
        let shows = vec![
            show(1, "Night Shift", "Meridian"),
            show(2, "Cold Open", "Pinnacle"),
            show(3, "Harbor", "Vista"),
        ];
        let rows = vec![
            CreditRow::new("Avery Park", ShowId::new(1), "Creator", "Meridian"),
            CreditRow::new("Avery Park", ShowId::new(2), "Creator", "Pinnacle"),
            CreditRow::new("Avery Park", ShowId::new(3), "Creator", "Vista"),
        ];

        let lists = classify(rows, shows);
        assert_eq!(lists.success_stories.len(), 1);
        assert!(lists.emerging_collaborations.is_empty());

        let story = &lists.success_stories[0];
        assert_eq!(story.label, "Avery Park");
        assert_eq!(story.show_count, 3);
        assert_eq!(story.network_count, 3);
        assert_eq!(story.networks, vec!["Meridian", "Pinnacle", "Vista"]);
    }

    #[test]
    fn test_two_shows_two_networks_is_emerging() {
        let shows = vec![
            show(1, "Night Shift", "Meridian"),
            show(2, "Cold Open", "Pinnacle"),
        ];
        let rows = vec![
            CreditRow::new("Dana Reyes", ShowId::new(1), "Writer", "Meridian"),
            CreditRow::new("Dana Reyes", ShowId::new(2), "Writer", "Pinnacle"),
        ];

        let lists = classify(rows, shows);
        assert!(lists.success_stories.is_empty());
        assert_eq!(lists.emerging_collaborations.len(), 1);
        assert_eq!(lists.emerging_collaborations[0].label, "Dana Reyes");
    }

    #[test]
    fn test_many_shows_on_two_networks_is_emerging_not_success() {
        let shows = vec![
            show(1, "Night Shift", "Meridian"),
            show(2, "Cold Open", "Meridian"),
            show(3, "Harbor", "Meridian"),
            show(4, "Backlot", "Pinnacle"),
        ];
        let rows = (1..=4)
            .map(|id| {
                let network = if id == 4 { "Pinnacle" } else { "Meridian" };
                CreditRow::new("Quinn Vale", ShowId::new(id), "Director", network)
            })
            .collect();

        let lists = classify(rows, shows);
        assert!(lists.success_stories.is_empty());
        assert_eq!(lists.emerging_collaborations.len(), 1);
        assert_eq!(lists.emerging_collaborations[0].show_count, 4);
        assert_eq!(lists.emerging_collaborations[0].network_count, 2);
    }

    #[test]
    fn test_single_network_catalog_is_out_of_scope() {
        let shows = vec![
            show(1, "Night Shift", "Meridian"),
            show(2, "Cold Open", "Meridian"),
            show(3, "Harbor", "Meridian"),
        ];
        let rows = (1..=3)
            .map(|id| CreditRow::new("Sana Iqbal", ShowId::new(id), "Writer", "Meridian"))
            .collect();

        let lists = classify(rows, shows);
        assert!(lists.is_empty());
    }

    #[test]
    fn test_team_classified_once_members_not_double_counted() {
        let shows = vec![
            show(1, "Night Shift", "Meridian"),
            show(2, "Cold Open", "Pinnacle"),
            show(3, "Harbor", "Vista"),
        ];
        let mut rows = Vec::new();
        for name in ["Avery Park", "Dana Reyes"] {
            rows.push(CreditRow::new(name, ShowId::new(1), "Creator", "Meridian"));
            rows.push(CreditRow::new(name, ShowId::new(2), "Creator", "Pinnacle"));
            rows.push(CreditRow::new(name, ShowId::new(3), "Creator", "Vista"));
        }

        let lists = classify(rows, shows);
        assert_eq!(lists.success_stories.len(), 1);
        assert_eq!(lists.success_stories[0].label, "Avery Park & Dana Reyes");
        assert!(lists.emerging_collaborations.is_empty());
    }

    #[test]
    fn test_sorted_by_breadth_then_label() {
        let shows = vec![
            show(1, "A1", "Meridian"),
            show(2, "A2", "Pinnacle"),
            show(3, "A3", "Vista"),
            show(4, "A4", "Crestline"),
            show(5, "B1", "Meridian"),
            show(6, "B2", "Pinnacle"),
            show(7, "B3", "Vista"),
        ];
        let mut rows = Vec::new();
        for show in &shows {
            let name = if show.id.value() <= 4 {
                "Xiomara Dunn"
            } else {
                "Yusuf Grant"
            };
            rows.push(CreditRow::new(name, show.id, "Writer", show.network.clone()));
        }

        let lists = classify(rows, shows);
        assert_eq!(lists.success_stories.len(), 2);
        // Four networks outranks three.
        assert_eq!(lists.success_stories[0].label, "Xiomara Dunn");
        assert_eq!(lists.success_stories[1].label, "Yusuf Grant");
    }
}
