//! Tests for the Greenlight configuration system.

use std::sync::Mutex;

use greenlight_core::config::GreenlightConfig;
use greenlight_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper: create a temporary directory.
fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all GREENLIGHT_ env vars to prevent cross-test contamination.
fn clear_greenlight_env_vars() {
    for key in [
        "GREENLIGHT_ANALYSIS_MIN_SHOWS",
        "GREENLIGHT_ANALYSIS_OVERLAP_THRESHOLD",
        "GREENLIGHT_ANALYSIS_MAJOR_SHARE",
        "GREENLIGHT_ANALYSIS_Z_THRESHOLD",
        "GREENLIGHT_LAYOUT_MAX_NODE_RADIUS",
        "GREENLIGHT_LAYOUT_CANVAS_SIZE",
    ] {
        std::env::remove_var(key);
    }
}

/// Missing config files fall back to compiled defaults.
#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    // No greenlight.toml exists
    let config = GreenlightConfig::load(dir.path()).unwrap();

    assert_eq!(config.analysis.effective_min_shows(), 3);
    assert_eq!(config.analysis.effective_overlap_threshold(), 0.8);
    assert_eq!(config.analysis.effective_z_threshold(), 1.5);
    assert_eq!(config.layout.effective_max_node_radius(), 60.0);
}

/// Project config values override compiled defaults.
#[test]
fn test_project_config_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");
    std::fs::write(
        &project_toml,
        r#"
[analysis]
min_shows = 4
overlap_threshold = 0.9

[layout]
max_node_radius = 48.0
"#,
    )
    .unwrap();

    let config = GreenlightConfig::load(dir.path()).unwrap();
    assert_eq!(config.analysis.effective_min_shows(), 4);
    assert_eq!(config.analysis.effective_overlap_threshold(), 0.9);
    assert_eq!(config.layout.effective_max_node_radius(), 48.0);
    // Untouched values still fall back
    assert_eq!(config.analysis.effective_z_threshold(), 1.5);
}

/// Env vars override the project config.
#[test]
fn test_env_overrides_project() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");
    std::fs::write(
        &project_toml,
        r#"
[analysis]
min_shows = 4
"#,
    )
    .unwrap();

    std::env::set_var("GREENLIGHT_ANALYSIS_MIN_SHOWS", "5");

    let config = GreenlightConfig::load(dir.path()).unwrap();
    assert_eq!(config.analysis.min_shows, Some(5));

    clear_greenlight_env_vars();
}

/// Invalid TOML syntax returns ConfigError::ParseError.
#[test]
fn test_invalid_toml_syntax() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");
    std::fs::write(&project_toml, "this is not valid toml {{{{").unwrap();

    let result = GreenlightConfig::load(dir.path());
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ParseError { .. } => {} // expected
        other => panic!("Expected ParseError, got: {:?}", other),
    }
}

/// Valid TOML with out-of-range values fails validation.
#[test]
fn test_invalid_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");

    // overlap_threshold > 1.0 should fail validation
    std::fs::write(
        &project_toml,
        r#"
[analysis]
overlap_threshold = 1.5
"#,
    )
    .unwrap();

    let result = GreenlightConfig::load(dir.path());
    assert!(result.is_err());
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "analysis.overlap_threshold");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

/// A zero show floor fails validation.
#[test]
fn test_zero_min_shows_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");
    std::fs::write(
        &project_toml,
        r#"
[analysis]
min_shows = 0
"#,
    )
    .unwrap();

    let result = GreenlightConfig::load(dir.path());
    match result.unwrap_err() {
        ConfigError::ValidationFailed { field, .. } => {
            assert_eq!(field, "analysis.min_shows");
        }
        other => panic!("Expected ValidationFailed, got: {:?}", other),
    }
}

/// Unrecognized keys are accepted (forward-compatible).
#[test]
fn test_unrecognized_keys_accepted() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");
    std::fs::write(
        &project_toml,
        r#"
[analysis]
min_shows = 3
future_unknown_key = "hello"

[future_section]
another_key = 42
"#,
    )
    .unwrap();

    let result = GreenlightConfig::load(dir.path());
    assert!(result.is_ok());
}

/// Load, serialize, and reload produces an identical config.
#[test]
fn test_config_round_trip() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_greenlight_env_vars();

    let dir = tempdir();
    let project_toml = dir.path().join("greenlight.toml");
    std::fs::write(
        &project_toml,
        r#"
[analysis]
min_shows = 4
overlap_threshold = 0.85
z_threshold = 2.0

[layout]
min_pool_size = 3
canvas_size = 800.0
"#,
    )
    .unwrap();

    let config1 = GreenlightConfig::load(dir.path()).unwrap();
    let toml_str = config1.to_toml().unwrap();

    let config2 = GreenlightConfig::from_toml(&toml_str).unwrap();

    assert_eq!(config1.analysis.min_shows, config2.analysis.min_shows);
    assert_eq!(
        config1.analysis.overlap_threshold,
        config2.analysis.overlap_threshold
    );
    assert_eq!(config1.analysis.z_threshold, config2.analysis.z_threshold);
    assert_eq!(config1.layout.min_pool_size, config2.layout.min_pool_size);
    assert_eq!(config1.layout.canvas_size, config2.layout.canvas_size);
}
