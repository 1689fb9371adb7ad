//! # Config Crate
//!
//! Centralized configuration constants for the filament winder pipeline.
//! The scene printer, the render driver and the command-line front end read
//! their defaults from here so no crate carries its own magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SCENE_FN, SCENE_EXTENSION, MESH_EXTENSION};
//!
//! let scene = format!("winder.{SCENE_EXTENSION}");
//! let mesh = format!("winder.{MESH_EXTENSION}");
//! assert_eq!(scene, "winder.scad");
//! assert_eq!(mesh, "winder.stl");
//! assert_eq!(DEFAULT_SCENE_FN, 200);
//! ```

pub mod constants;

#[cfg(test)]
mod tests;
