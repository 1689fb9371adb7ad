//! # Geometry Errors
//!
//! Error types raised while constructing geometry nodes.

use thiserror::Error;

/// Errors raised when a primitive fails dimension validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// A size component was zero or negative.
    #[error("{primitive} {dimension} must be positive, got {value}")]
    NonPositiveDimension {
        /// Primitive being built (`cube`, `cylinder`).
        primitive: &'static str,
        /// Offending dimension name.
        dimension: &'static str,
        /// Value supplied.
        value: f64,
    },

    /// A size component was NaN or infinite.
    #[error("{primitive} {dimension} must be finite, got {value}")]
    NonFiniteDimension {
        /// Primitive being built.
        primitive: &'static str,
        /// Offending dimension name.
        dimension: &'static str,
        /// Value supplied.
        value: f64,
    },
}

impl GeometryError {
    /// Checks one primitive dimension against both failure kinds.
    pub(crate) fn check(
        primitive: &'static str,
        dimension: &'static str,
        value: f64,
    ) -> Result<(), Self> {
        if !value.is_finite() {
            return Err(Self::NonFiniteDimension {
                primitive,
                dimension,
                value,
            });
        }
        if value <= config::constants::EPSILON {
            return Err(Self::NonPositiveDimension {
                primitive,
                dimension,
                value,
            });
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
