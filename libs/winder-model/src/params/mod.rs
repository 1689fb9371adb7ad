//! # Parameter Set
//!
//! The eighteen dimensions (millimetres) that shape the filament winder,
//! loaded from a flat TOML table.
//!
//! ## Example
//!
//! ```rust
//! use winder_model::ParameterSet;
//!
//! let params = ParameterSet::from_toml_str(r#"
//!     spool_diameter = 200
//!     screw_diameter = 4
//!     motor_screw_x = 20
//!     motor_screw_y = 20
//!     spool_base_width = 150
//!     spool_base_height = 300
//!     camera_mount_height = 30
//!     camera_mount_width = 60
//!     camera_mount_x = 40
//!     camera_mount_y = 40
//!     camera_filament_offset = 20
//!     filament_max_diameter = 3
//!     motor_length = 42
//!     motor_width = 42
//!     motor_height = 42
//!     motor_shaft_diameter = 5
//!     spool_shaft_diameter = 8
//!     wall_thickness = 4
//! "#).unwrap();
//! assert!(params.validate().is_ok());
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigLoadError, ParameterError, ValidationError};

// =============================================================================
// PARAMETER SET
// =============================================================================

/// Dimensions of one filament winder. Every key is required.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParameterSet {
    /// Spool flange diameter; sets the bushing cut-out and motor height.
    pub spool_diameter: f64,
    /// Motor mounting screw diameter.
    pub screw_diameter: f64,
    /// Screw offset from the motor axis along X.
    pub motor_screw_x: f64,
    /// Screw offset from the motor axis along Y.
    pub motor_screw_y: f64,
    /// Spool base plate width (X).
    pub spool_base_width: f64,
    /// Spool base plate depth (Y).
    pub spool_base_height: f64,
    /// Camera plate depth.
    pub camera_mount_height: f64,
    /// Camera plate width.
    pub camera_mount_width: f64,
    /// Length of the camera support X bar.
    pub camera_mount_x: f64,
    /// Length of the camera support Y bar.
    pub camera_mount_y: f64,
    /// Height of the filament guide loops above the camera plate.
    pub camera_filament_offset: f64,
    /// Widest filament the guide loops must pass.
    pub filament_max_diameter: f64,
    /// Motor body length.
    pub motor_length: f64,
    /// Motor body width.
    pub motor_width: f64,
    /// Motor body height. Validated only.
    pub motor_height: f64,
    /// Motor shaft diameter.
    pub motor_shaft_diameter: f64,
    /// Spool shaft diameter. Validated only.
    pub spool_shaft_diameter: f64,
    /// Thickness of every plate, bar and loop.
    pub wall_thickness: f64,
}

impl Default for ParameterSet {
    /// NEMA17 motor, 200 mm spool flange, laptop USB camera.
    fn default() -> Self {
        Self {
            spool_diameter: 200.0,
            screw_diameter: 4.0,
            motor_screw_x: 20.0,
            motor_screw_y: 20.0,
            spool_base_width: 150.0,
            spool_base_height: 300.0,
            camera_mount_height: 30.0,
            camera_mount_width: 60.0,
            camera_mount_x: 40.0,
            camera_mount_y: 40.0,
            camera_filament_offset: 20.0,
            filament_max_diameter: 3.0,
            motor_length: 42.0,
            motor_width: 42.0,
            motor_height: 42.0,
            motor_shaft_diameter: 5.0,
            spool_shaft_diameter: 8.0,
            wall_thickness: 4.0,
        }
    }
}

impl ParameterSet {
    /// Read and deserialize a TOML parameter file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&source).map_err(|source| ConfigLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Deserialize a TOML document held in memory.
    pub fn from_toml_str(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Every field paired with its key, in declaration order.
    pub fn fields(&self) -> [(&'static str, f64); 18] {
        [
            ("spool_diameter", self.spool_diameter),
            ("screw_diameter", self.screw_diameter),
            ("motor_screw_x", self.motor_screw_x),
            ("motor_screw_y", self.motor_screw_y),
            ("spool_base_width", self.spool_base_width),
            ("spool_base_height", self.spool_base_height),
            ("camera_mount_height", self.camera_mount_height),
            ("camera_mount_width", self.camera_mount_width),
            ("camera_mount_x", self.camera_mount_x),
            ("camera_mount_y", self.camera_mount_y),
            ("camera_filament_offset", self.camera_filament_offset),
            ("filament_max_diameter", self.filament_max_diameter),
            ("motor_length", self.motor_length),
            ("motor_width", self.motor_width),
            ("motor_height", self.motor_height),
            ("motor_shaft_diameter", self.motor_shaft_diameter),
            ("spool_shaft_diameter", self.spool_shaft_diameter),
            ("wall_thickness", self.wall_thickness),
        ]
    }

    /// Check every rule and report all violations at once.
    ///
    /// Relational rules are only checked when the fields they compare are
    /// themselves valid numbers.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        for (field, value) in self.fields() {
            if !value.is_finite() {
                errors.push(ParameterError::NonFinite { field, value });
            } else if value <= 0.0 {
                errors.push(ParameterError::NonPositive { field, value });
            }
        }

        let usable = |value: f64| value.is_finite() && value > 0.0;

        let screw_axes = [
            ("motor_screw_x", self.motor_screw_x, self.motor_width),
            ("motor_screw_y", self.motor_screw_y, self.motor_length),
        ];
        for (field, offset, extent) in screw_axes {
            let limit = extent / 2.0;
            if usable(offset) && usable(extent) && offset >= limit {
                errors.push(ParameterError::ScrewOutsideBracket {
                    field,
                    offset,
                    limit,
                });
            }
        }

        let (filament, wall) = (self.filament_max_diameter, self.wall_thickness);
        if usable(filament) && usable(wall) && filament >= wall {
            errors.push(ParameterError::FilamentLoopClosed { filament, wall });
        }

        let (shaft, motor_width) = (self.motor_shaft_diameter, self.motor_width);
        if usable(shaft) && usable(motor_width) && shaft >= motor_width {
            errors.push(ParameterError::ShaftWiderThanMotor { shaft, motor_width });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

#[cfg(test)]
mod tests;
