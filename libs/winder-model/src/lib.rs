//! # Winder Model
//!
//! Parametric model of a filament winder: a spool bushing plate, the
//! stepper motor bracket that turns the spool, and a camera mount with
//! filament guide loops.
//!
//! ## Pipeline
//!
//! ```text
//! configuration.toml → ParameterSet → validate → filament_winder → GeometryNode
//! ```
//!
//! ## Example
//!
//! ```rust
//! use winder_model::{filament_winder, ParameterSet};
//!
//! let winder = filament_winder(&ParameterSet::default()).unwrap();
//! assert!(winder.bounds().size().y > 300.0);
//! ```

pub mod builder;
pub mod error;
pub mod params;

// Re-export public API
pub use builder::{filament_winder, AssemblyParts};
pub use error::{BuildError, ConfigLoadError, ParameterError, ValidationError};
pub use params::ParameterSet;
