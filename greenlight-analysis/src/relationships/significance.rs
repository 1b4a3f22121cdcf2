//! Role significance: cross-network z-score outlier detection.

use statrs::statistics::Statistics;
use tracing::debug;

use greenlight_core::types::CreditRole;

use super::types::{NetworkProfile, RoleSignal};

/// Flag role percentages that sit far from the cross-network norm.
///
/// For each vocabulary role, every network contributes its percentage
/// (zero when the role is absent from its pool); a network is flagged when
/// the absolute z-score against that distribution exceeds `z_threshold`.
/// Distributions with fewer than two networks or zero variance are not
/// computable and are skipped outright, so no NaN can reach the output.
/// Output is ordered by vocabulary role, then network name.
pub fn role_signals(profiles: &[NetworkProfile], z_threshold: f64) -> Vec<RoleSignal> {
    if profiles.len() < 2 {
        return Vec::new();
    }

    let mut signals = Vec::new();
    for role in CreditRole::ALL {
        let values: Vec<f64> = profiles
            .iter()
            .map(|profile| percentage_of(profile, role))
            .collect();

        let mean = Statistics::mean(&values);
        let std_dev = Statistics::std_dev(&values);
        if !std_dev.is_finite() || std_dev <= 0.0 {
            // All networks agree on this role. No outliers possible.
            debug!(role = %role, "zero-variance role distribution skipped");
            continue;
        }

        for (profile, value) in profiles.iter().zip(&values) {
            let z = (value - mean) / std_dev;
            if z.abs() > z_threshold {
                signals.push(RoleSignal {
                    network: profile.name.clone(),
                    role,
                    percentage: *value,
                    z_score: z,
                });
            }
        }
    }

    signals.sort_by(|a, b| (a.role, &a.network).cmp(&(b.role, &b.network)));
    signals
}

fn percentage_of(profile: &NetworkProfile, role: CreditRole) -> f64 {
    profile
        .role_breakdown
        .iter()
        .find(|entry| entry.role == role)
        .map(|entry| entry.percentage)
        .unwrap_or(0.0)
}
