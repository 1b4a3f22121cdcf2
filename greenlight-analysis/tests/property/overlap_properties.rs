use std::collections::BTreeSet;

use proptest::prelude::*;

use greenlight_analysis::partnerships::detector::overlap_ratios;
use greenlight_analysis::{
    CreditIndex, PackageRanker, PartnershipDetector, StoryClassifier,
};
use greenlight_core::traits::ShowTableScorer;
use greenlight_core::types::collections::FxHashMap;
use greenlight_core::types::{CreditRow, Show, ShowId};

const NAMES: [&str; 8] = [
    "Avery Park",
    "Dana Reyes",
    "Felix Marsh",
    "Noor Haddad",
    "Quinn Vale",
    "Sana Iqbal",
    "Xiomara Dunn",
    "Yusuf Grant",
];
const NETWORKS: [&str; 4] = ["Crestline", "Meridian", "Pinnacle", "Vista"];
const GENRES: [&str; 3] = ["Comedy", "Drama", "Thriller"];
const ROLES: [&str; 3] = ["Director", "Producer", "Writer"];

/// Build an index from arbitrary (creator, show) credit pairs over a
/// fixed 12-show universe.
fn index_from_pairs(pairs: &[(usize, u64)]) -> CreditIndex {
    let mut shows: FxHashMap<ShowId, Show> = FxHashMap::default();
    for id in 1..=12u64 {
        let mut show = Show::new(
            ShowId::new(id),
            format!("Show {id:02}"),
            NETWORKS[(id % 4) as usize],
            GENRES[(id % 3) as usize],
        );
        if id % 5 != 0 {
            show = show.with_success_score((id * 7 % 100) as f64);
        }
        shows.insert(show.id, show);
    }

    let rows: Vec<CreditRow> = pairs
        .iter()
        .map(|&(creator, show_id)| {
            CreditRow::new(
                NAMES[creator % NAMES.len()],
                ShowId::new(show_id),
                ROLES[(creator + show_id as usize) % ROLES.len()],
                NETWORKS[(show_id % 4) as usize],
            )
        })
        .collect();

    CreditIndex::build(&rows, &shows).expect("synthetic input is always valid")
}

fn credit_pairs() -> impl Strategy<Value = Vec<(usize, u64)>> {
    prop::collection::vec((0usize..NAMES.len(), 1u64..=12), 0..60)
}

proptest! {
    #[test]
    fn teams_always_satisfy_both_ratios(pairs in credit_pairs()) {
        let index = index_from_pairs(&pairs);
        let result = PartnershipDetector::new(3, 0.8).detect(&index);

        for team in &result.teams {
            let a = index.creator(&team.members[0]).unwrap();
            let b = index.creator(&team.members[1]).unwrap();
            let (ratio_a, ratio_b) = overlap_ratios(&a.shows, &b.shows);
            prop_assert!(ratio_a >= 0.8, "one-sided team: {} {}", ratio_a, ratio_b);
            prop_assert!(ratio_b >= 0.8, "one-sided team: {} {}", ratio_a, ratio_b);
        }
    }

    #[test]
    fn teamed_creators_form_a_partition(pairs in credit_pairs()) {
        let index = index_from_pairs(&pairs);
        let result = PartnershipDetector::new(3, 0.8).detect(&index);

        let mut seen = BTreeSet::new();
        for team in &result.teams {
            for member in &team.members {
                prop_assert!(seen.insert(member.clone()), "{member} in two teams");
            }
        }
        for name in &result.solo {
            prop_assert!(seen.insert(name.clone()), "{name} both teamed and solo");
        }
    }

    #[test]
    fn story_lists_are_disjoint(pairs in credit_pairs()) {
        let index = index_from_pairs(&pairs);
        let partnerships = PartnershipDetector::new(3, 0.8).detect(&index);
        let stories = StoryClassifier::new().classify(&index, &partnerships);

        let success: BTreeSet<&str> = stories
            .success_stories
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        for story in &stories.emerging_collaborations {
            prop_assert!(!success.contains(story.label.as_str()));
        }
    }

    #[test]
    fn suggestions_are_sorted_non_increasing(pairs in credit_pairs()) {
        let index = index_from_pairs(&pairs);
        let suggestions = PackageRanker::new(2, 0.8, 2).suggest_all(&index, &ShowTableScorer);

        for window in suggestions.windows(2) {
            let (a, b) = (&window[0], &window[1]);
            let in_order = a.network_count > b.network_count
                || (a.network_count == b.network_count
                    && (a.total_shows > b.total_shows
                        || (a.total_shows == b.total_shows
                            && a.overall_success >= b.overall_success)));
            prop_assert!(in_order, "ranking regressed: {:?} before {:?}", a.label, b.label);
        }
    }

    #[test]
    fn detection_is_deterministic(pairs in credit_pairs()) {
        let index = index_from_pairs(&pairs);
        let first = PartnershipDetector::new(3, 0.8).detect(&index);
        let second = PartnershipDetector::new(3, 0.8).detect(&index);
        prop_assert_eq!(first, second);
    }
}
