//! Genre diversity: major-category counting over a network's shows.

use greenlight_core::types::collections::FxHashMap;
use greenlight_core::types::Show;

use super::types::GenreShare;

/// Categories holding strictly more than `major_share` of `total` shows.
///
/// `extract` picks the category off each show; shows yielding `None` are
/// skipped but still sit in the denominator, so a category's share never
/// depends on how many shows carry the attribute. Output is sorted by count
/// descending, ties by name ascending. A zero `total` yields nothing.
pub fn major_shares<'a, F>(shows: &[&'a Show], total: usize, major_share: f64, extract: F) -> Vec<GenreShare>
where
    F: Fn(&'a Show) -> Option<&'a str>,
{
    if total == 0 {
        return Vec::new();
    }

    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for show in shows {
        if let Some(category) = extract(show) {
            *counts.entry(category).or_default() += 1;
        }
    }

    let mut majors: Vec<GenreShare> = counts
        .into_iter()
        .map(|(genre, show_count)| GenreShare {
            genre: genre.to_string(),
            show_count,
            share: show_count as f64 / total as f64,
        })
        .filter(|entry| entry.share > major_share)
        .collect();

    majors.sort_by(|a, b| {
        b.show_count
            .cmp(&a.show_count)
            .then_with(|| a.genre.cmp(&b.genre))
    });
    majors
}
