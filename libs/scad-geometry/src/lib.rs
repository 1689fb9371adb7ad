//! # Scad Geometry
//!
//! Geometry description tree for OpenSCAD scene generation.
//!
//! ## Architecture
//!
//! ```text
//! ParameterSet → winder-model (GeometryNode) → scad-scene (text) → scad-render (mesh)
//! ```
//!
//! The tree is never mutated once built. Every combinator takes its operands
//! by value, so a subtree can only end up in one place of one tree.
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use scad_geometry::GeometryNode;
//!
//! let plate = GeometryNode::cube(DVec3::new(42.0, 42.0, 4.0), true).unwrap();
//! let hole = GeometryNode::cylinder(4.0, 4.0, true).unwrap();
//! let part = plate - hole.translate(DVec3::new(20.0, 20.0, 0.0));
//! assert_eq!(part.primitive_count(), 2);
//! ```

pub mod bounds;
pub mod error;
pub mod node;

// Re-export public API
pub use bounds::{rotation_matrix, BoundingBox};
pub use error::GeometryError;
pub use node::{GeometryNode, NodeKind};
