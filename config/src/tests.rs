//! # Tests for Config Constants

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive_and_small() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_approx_equal_absorbs_rotation_noise() {
    // rotate([90, 0, 0]) leaves values like this behind
    assert!(approx_equal(98.00000000000001, 98.0));
    assert!(!approx_equal(98.0, 98.001));
}

// =============================================================================
// PARSER TESTS
// =============================================================================

#[test]
fn test_nesting_limit_allows_real_scenes() {
    assert!(MAX_NESTING_DEPTH >= 64);
    assert!(MAX_NESTING_DEPTH <= 1024, "limit must stay well inside a thread stack");
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_scene_fn() {
    assert_eq!(DEFAULT_SCENE_FN, 200);
    assert!(DEFAULT_SCENE_FN >= MIN_SCENE_FN);
}

#[test]
fn test_scene_config_default() {
    assert_eq!(SceneConfig::default().resolution, DEFAULT_SCENE_FN);
}

#[test]
fn test_scene_config_rejects_degenerate_resolution() {
    assert_eq!(
        SceneConfig::new(2).unwrap_err(),
        ConfigError::InvalidResolution(2)
    );
    assert_eq!(SceneConfig::new(3).unwrap().resolution, 3);
}

#[test]
fn test_config_error_display() {
    let msg = ConfigError::InvalidResolution(1).to_string();
    assert!(msg.contains(">= 3"));
    assert!(msg.contains('1'));
}

// =============================================================================
// FILE TESTS
// =============================================================================

#[test]
fn test_extensions_have_no_dot() {
    assert!(!SCENE_EXTENSION.starts_with('.'));
    assert!(!MESH_EXTENSION.starts_with('.'));
}

#[test]
fn test_default_names() {
    assert_eq!(DEFAULT_OUTPUT_NAME, "filament_winder");
    assert_eq!(DEFAULT_CONFIG_FILE, "configuration.toml");
    assert_eq!(DEFAULT_RENDERER_BINARY, "openscad");
}
