//! Deterministic fixture datasets shared by integration tests and benches.
//!
//! `studio_verse` is the canonical dataset: four networks, three studios,
//! one exact partnership, solo creators at every story tier, and a mix of
//! scored and unscored shows. Expected analytics over it are asserted in
//! the cross-crate tests under `tests/`.

use greenlight_core::traits::InMemorySource;
use greenlight_core::types::collections::FxHashMap;
use greenlight_core::types::{CreditRow, Show, ShowId};

/// The canonical dataset: credit rows plus the show attribute table.
///
/// Highlights baked into the data:
/// - Avery Park and Dana Reyes share an identical 3-show catalog across
///   3 networks (an exact partnership and a team success story)
/// - Quinn Vale spans 4 shows on 3 networks solo
/// - Sana Iqbal, Xiomara Dunn, and Felix Marsh sit at the emerging tier
/// - Yusuf Grant and Noor Haddad never leave a single network
/// - Crestline airs one show, below every analysis floor
/// - "Low Tide" carries no success score
pub fn studio_verse() -> (Vec<CreditRow>, FxHashMap<ShowId, Show>) {
    let shows = studio_verse_shows();
    let rows = studio_verse_rows();
    (rows, shows)
}

/// The same dataset behind the credit-source seam.
pub fn studio_verse_source() -> InMemorySource {
    let (rows, shows) = studio_verse();
    InMemorySource::new(rows, shows)
}

/// The show attribute table on its own.
pub fn studio_verse_shows() -> FxHashMap<ShowId, Show> {
    let shows = vec![
        Show::new(ShowId::new(1), "Night Shift", "Meridian", "Drama")
            .with_studio("Lantern Pictures")
            .with_subgenre("Medical")
            .with_episodes(10)
            .with_success_score(82.0),
        Show::new(ShowId::new(2), "Cold Open", "Meridian", "Comedy")
            .with_studio("Lantern Pictures")
            .with_studio("Harbor Light")
            .with_subgenre("Sketch")
            .with_episodes(8)
            .with_success_score(74.0),
        Show::new(ShowId::new(3), "Harbor", "Meridian", "Drama")
            .with_studio("Harbor Light")
            .with_subgenre("Crime")
            .with_episodes(10)
            .with_success_score(68.0),
        Show::new(ShowId::new(4), "Backlot", "Pinnacle", "Comedy")
            .with_studio("Lantern Pictures")
            .with_subgenre("Workplace")
            .with_episodes(12)
            .with_success_score(77.0),
        Show::new(ShowId::new(5), "Skyline", "Pinnacle", "Drama")
            .with_studio("Northbank")
            .with_subgenre("Legal")
            .with_episodes(10)
            .with_success_score(85.0),
        Show::new(ShowId::new(6), "Causeway", "Pinnacle", "Thriller")
            .with_studio("Harbor Light")
            .with_subgenre("Crime")
            .with_episodes(6)
            .with_success_score(61.0),
        Show::new(ShowId::new(7), "Night Market", "Vista", "Drama")
            .with_studio("Northbank")
            .with_subgenre("Medical")
            .with_episodes(8)
            .with_success_score(79.0),
        Show::new(ShowId::new(8), "Second Unit", "Vista", "Comedy")
            .with_studio("Lantern Pictures")
            .with_subgenre("Workplace")
            .with_episodes(10)
            .with_success_score(72.0),
        Show::new(ShowId::new(9), "Low Tide", "Vista", "Thriller")
            .with_studio("Harbor Light")
            .with_episodes(6),
        Show::new(ShowId::new(10), "Signal Fire", "Crestline", "Thriller")
            .with_studio("Northbank")
            .with_subgenre("Spy")
            .with_episodes(8)
            .with_success_score(88.0),
        Show::new(ShowId::new(11), "Patch Notes", "Meridian", "Comedy")
            .with_studio("Lantern Pictures")
            .with_subgenre("Workplace")
            .with_episodes(8)
            .with_success_score(66.0),
        Show::new(ShowId::new(12), "Wheelhouse", "Pinnacle", "Drama")
            .with_studio("Lantern Pictures")
            .with_subgenre("Legal")
            .with_episodes(10)
            .with_success_score(70.0),
    ];
    shows.into_iter().map(|show| (show.id, show)).collect()
}

/// The credit rows on their own. Row order is intentionally shuffled and
/// show 1 carries a duplicate-role row for Avery Park.
pub fn studio_verse_rows() -> Vec<CreditRow> {
    vec![
        CreditRow::new("Avery Park", ShowId::new(1), "Creator", "Meridian"),
        CreditRow::new("Dana Reyes", ShowId::new(7), "Creator", "Vista"),
        CreditRow::new("Quinn Vale", ShowId::new(5), "Writer", "Pinnacle"),
        CreditRow::new("Avery Park", ShowId::new(1), "Executive Producer", "Meridian"),
        CreditRow::new("Yusuf Grant", ShowId::new(1), "Executive Producer", "Meridian"),
        CreditRow::new("Sana Iqbal", ShowId::new(2), "Writer", "Meridian"),
        CreditRow::new("Avery Park", ShowId::new(4), "Creator", "Pinnacle"),
        CreditRow::new("Xiomara Dunn", ShowId::new(3), "Director", "Meridian"),
        CreditRow::new("Dana Reyes", ShowId::new(1), "Creator", "Meridian"),
        CreditRow::new("Quinn Vale", ShowId::new(8), "Showrunner", "Vista"),
        CreditRow::new("Felix Marsh", ShowId::new(4), "Producer", "Pinnacle"),
        CreditRow::new("Yusuf Grant", ShowId::new(3), "Producer", "Meridian"),
        CreditRow::new("Dana Reyes", ShowId::new(4), "Writer", "Pinnacle"),
        CreditRow::new("Quinn Vale", ShowId::new(10), "Writer", "Crestline"),
        CreditRow::new("Xiomara Dunn", ShowId::new(9), "Director", "Vista"),
        CreditRow::new("Noor Haddad", ShowId::new(5), "Writer", "Pinnacle"),
        CreditRow::new("Avery Park", ShowId::new(7), "Creator", "Vista"),
        CreditRow::new("Sana Iqbal", ShowId::new(6), "Writer", "Pinnacle"),
        CreditRow::new("Quinn Vale", ShowId::new(12), "Writer", "Pinnacle"),
        CreditRow::new("Xiomara Dunn", ShowId::new(11), "Director", "Meridian"),
        CreditRow::new("Yusuf Grant", ShowId::new(11), "Executive Producer", "Meridian"),
        CreditRow::new("Felix Marsh", ShowId::new(8), "Producer", "Vista"),
    ]
}
