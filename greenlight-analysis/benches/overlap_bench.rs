//! Partnership-detection and package-ranking benchmarks.
//!
//! Synthetic catalogs: adjacent creator pairs share identical 3-show
//! catalogs, so half the candidates bond. Run with:
//! cargo bench -p greenlight-analysis --bench overlap_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use greenlight_analysis::{CreditIndex, PackageRanker, PartnershipDetector};
use greenlight_core::traits::ShowTableScorer;
use greenlight_core::types::collections::FxHashMap;
use greenlight_core::types::{CreditRow, Show, ShowId};

const NETWORKS: [&str; 6] = [
    "Crestline", "Harborview", "Meridian", "Pinnacle", "Summit", "Vista",
];

/// Build an index with `creators` creators over `creators * 2` shows.
fn synthetic_index(creators: usize) -> CreditIndex {
    let show_count = (creators * 2).max(8) as u64;
    let mut shows: FxHashMap<ShowId, Show> = FxHashMap::default();
    for id in 1..=show_count {
        let show = Show::new(
            ShowId::new(id),
            format!("Show {id:05}"),
            NETWORKS[(id % 6) as usize],
            "Drama",
        )
        .with_success_score((id * 13 % 100) as f64);
        shows.insert(show.id, show);
    }

    let mut rows = Vec::new();
    for i in 0..creators {
        // Creators 2k and 2k+1 share a catalog; every fifth creator
        // picks up a stray extra show to break some bonds.
        let base = (i / 2) as u64 * 3;
        let mut ids = vec![
            base % show_count + 1,
            (base + 17) % show_count + 1,
            (base + 31) % show_count + 1,
        ];
        if i % 5 == 0 {
            ids.push((base + 47) % show_count + 1);
        }
        for id in ids {
            let network = NETWORKS[(id % 6) as usize];
            rows.push(CreditRow::new(
                format!("Creator {i:04}"),
                ShowId::new(id),
                "Writer",
                network,
            ));
        }
    }

    CreditIndex::build(&rows, &shows).unwrap()
}

fn partnership_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("partnership_detection");
    group.sample_size(10);

    for size in [50, 200, 500] {
        let index = synthetic_index(size);
        group.bench_with_input(BenchmarkId::new("detect", size), &size, |b, _| {
            b.iter(|| PartnershipDetector::new(3, 0.8).detect(&index));
        });
    }
    group.finish();
}

fn package_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("package_ranking");
    group.sample_size(10);

    for size in [50, 200, 500] {
        let index = synthetic_index(size);
        group.bench_with_input(BenchmarkId::new("suggest_all", size), &size, |b, _| {
            b.iter(|| PackageRanker::new(2, 0.8, 2).suggest_all(&index, &ShowTableScorer));
        });
    }
    group.finish();
}

criterion_group!(benches, partnership_detection, package_ranking);
criterion_main!(benches);
