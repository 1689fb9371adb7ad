//! # Model Errors
//!
//! Error types for parameter loading, validation and assembly.

use std::fmt;
use std::path::PathBuf;

use scad_geometry::GeometryError;
use thiserror::Error;

// =============================================================================
// PARAMETER ERRORS
// =============================================================================

/// One rule a parameter set broke.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// NaN or infinite value.
    #[error("{field} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// Zero or negative value.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Parameter name.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// Screw centre falls outside the lower bracket plate.
    #[error("{field} = {offset} puts the screw outside the bracket (limit {limit})")]
    ScrewOutsideBracket {
        /// Offset parameter name.
        field: &'static str,
        /// Offset supplied.
        offset: f64,
        /// Half of the bracket extent along the same axis.
        limit: f64,
    },

    /// Filament hole is as wide as the loop around it.
    #[error("filament_max_diameter ({filament}) must be smaller than wall_thickness ({wall})")]
    FilamentLoopClosed {
        /// `filament_max_diameter`
        filament: f64,
        /// `wall_thickness`
        wall: f64,
    },

    /// Shaft bore would split the motor bracket.
    #[error("motor_shaft_diameter ({shaft}) must be smaller than motor_width ({motor_width})")]
    ShaftWiderThanMotor {
        /// `motor_shaft_diameter`
        shaft: f64,
        /// `motor_width`
        motor_width: f64,
    },
}

/// Every rule a parameter set broke, in field order.
#[derive(Debug, Clone, PartialEq, Error)]
pub struct ValidationError {
    /// Individual violations; never empty.
    pub errors: Vec<ParameterError>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid parameter set: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

// =============================================================================
// LOAD ERRORS
// =============================================================================

/// Errors raised while reading a parameter file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    /// File could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// File is not valid TOML, or keys are missing or unknown.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        /// Path that was read.
        path: PathBuf,
        /// Underlying error.
        source: toml::de::Error,
    },
}

// =============================================================================
// BUILD ERRORS
// =============================================================================

/// Errors raised by the geometry builder.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    /// Parameter set failed validation.
    #[error(transparent)]
    InvalidParameters(#[from] ValidationError),

    /// A primitive rejected its dimensions.
    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

// =============================================================================
// TESTS
// =============================================================================
