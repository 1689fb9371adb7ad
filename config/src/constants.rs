//! # Configuration Constants
//!
//! Centralized constants for the filament winder pipeline. Scene resolution,
//! file naming, renderer lookup and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: The `$fn` directive written at the top of every scene
//! - **Files**: Default names and extensions for scene and mesh artifacts
//! - **Parser**: Limits applied while reading scene files
//! - **Renderer**: How the external OpenSCAD binary is located

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used when comparing bounding boxes and transformed coordinates, where
/// trigonometric rotations leave values such as `98.00000000000001`.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS ($fn)
// =============================================================================

/// Default value of the global `$fn` directive written to scene files.
///
/// 200 fragments keeps the spool bushing and the motor shaft bore smooth
/// enough to print without visible facets.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SCENE_FN;
///
/// let user_fn: Option<u32> = None;
/// assert_eq!(user_fn.unwrap_or(DEFAULT_SCENE_FN), 200);
/// ```
pub const DEFAULT_SCENE_FN: u32 = 200;

/// Minimum accepted scene resolution.
///
/// A circle needs at least three fragments to enclose any area.
pub const MIN_SCENE_FN: u32 = 3;

// =============================================================================
// FILE CONSTANTS
// =============================================================================

/// Extension of the textual scene description consumed by the renderer.
pub const SCENE_EXTENSION: &str = "scad";

/// Extension of the mesh produced by the renderer.
pub const MESH_EXTENSION: &str = "stl";

/// Base name used for both artifacts when none is given.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_OUTPUT_NAME, SCENE_EXTENSION};
///
/// let scene = format!("{DEFAULT_OUTPUT_NAME}.{SCENE_EXTENSION}");
/// assert_eq!(scene, "filament_winder.scad");
/// ```
pub const DEFAULT_OUTPUT_NAME: &str = "filament_winder";

/// Parameter file read when no path is given on the command line.
pub const DEFAULT_CONFIG_FILE: &str = "configuration.toml";

// =============================================================================
// PARSER CONSTANTS
// =============================================================================

/// Deepest block nesting the scene parser accepts.
///
/// The parser recurses once per level, so this bounds its stack use. Scenes
/// printed from the winder assembly stay below twenty levels.
pub const MAX_NESTING_DEPTH: usize = 256;

// =============================================================================
// RENDERER CONSTANTS
// =============================================================================

/// Renderer binary name, resolved through `PATH`.
pub const DEFAULT_RENDERER_BINARY: &str = "openscad";

/// Environment variable that overrides [`DEFAULT_RENDERER_BINARY`].
pub const RENDERER_ENV_VAR: &str = "OPENSCAD_BIN";

// =============================================================================
// SCENE CONFIG
// =============================================================================

/// Validated settings shared by the scene printer and the render driver.
///
/// # Examples
/// ```
/// use config::constants::SceneConfig;
/// let config = SceneConfig::default();
/// assert_eq!(config.resolution, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneConfig {
    /// Global `$fn` value emitted at the top of the scene.
    pub resolution: u32,
}

impl SceneConfig {
    /// Builds a configuration, rejecting resolutions that cannot form a polygon.
    ///
    /// # Examples
    /// ```
    /// use config::constants::SceneConfig;
    /// let cfg = SceneConfig::new(64).expect("valid config");
    /// assert_eq!(cfg.resolution, 64);
    /// assert!(SceneConfig::new(2).is_err());
    /// ```
    pub fn new(resolution: u32) -> Result<Self, ConfigError> {
        if resolution < MIN_SCENE_FN {
            return Err(ConfigError::InvalidResolution(resolution));
        }
        Ok(Self { resolution })
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_SCENE_FN,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Raised when the requested `$fn` is too small to form a polygon.
    InvalidResolution(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidResolution(value) => {
                write!(f, "scene resolution must be >= {MIN_SCENE_FN}: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}
