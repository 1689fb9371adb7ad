//! # Scad Render
//!
//! Writes scenes to disk and turns them into meshes.
//!
//! ## Architecture
//!
//! ```text
//! Scene → RenderDriver::write_scene → <name>.scad → Renderer → <name>.stl
//! ```
//!
//! The renderer is a trait so the pipeline runs without OpenSCAD installed.

pub mod driver;
pub mod error;
pub mod renderer;

// Re-export public API
pub use driver::{RenderDriver, RenderOutput};
pub use error::RenderError;
pub use renderer::{OpenScadRenderer, Renderer, StubRenderer};
