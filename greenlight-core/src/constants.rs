//! Compiled defaults for analysis thresholds and layout tuning.
//! Config values fall back to these when unset.

/// Greenlight engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum shows a creator needs to be a partnership candidate.
pub const DEFAULT_MIN_SHOWS: usize = 3;

/// Two-sided show-overlap ratio required to bond a pair.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.8;

/// Minimum shows a network or studio needs before ratio metrics are computed.
pub const DEFAULT_MIN_NETWORK_SHOWS: usize = 3;

/// Genre share a category must strictly exceed to count as major.
pub const DEFAULT_MAJOR_SHARE: f64 = 0.10;

/// Absolute z-score above which a role percentage is flagged as an outlier.
pub const DEFAULT_Z_THRESHOLD: f64 = 1.5;

/// Minimum in-scope shows a creator needs to seed or join a package.
pub const DEFAULT_PACKAGE_MIN_SHOWS: usize = 2;

/// Minimum distinct networks a package must span to be suggested.
pub const DEFAULT_PACKAGE_MIN_NETWORKS: usize = 2;

/// Minimum talent-pool size for a network/studio to appear in the graph.
pub const DEFAULT_MIN_POOL_SIZE: usize = 2;

/// Radius of the largest graph node; smaller nodes scale linearly.
pub const DEFAULT_MAX_NODE_RADIUS: f64 = 60.0;

/// Square canvas edge length the layout targets.
pub const DEFAULT_CANVAS_SIZE: f64 = 1000.0;

/// Iteration budget for the stress-minimizing layout before it gives up.
pub const STRESS_MAX_ITERATIONS: usize = 300;

/// Relative energy change below which the stress layout counts as converged.
pub const STRESS_TOLERANCE: f64 = 1e-4;

/// Fixed iteration budget for the spring-force fallback layout.
pub const SPRING_ITERATIONS: usize = 50;
