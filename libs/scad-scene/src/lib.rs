//! # Scad Scene
//!
//! Serializes geometry trees to OpenSCAD scene files and reads them back.
//!
//! ## Architecture
//!
//! ```text
//! GeometryNode → printer → "$fn = 200; difference() { ... }"
//! Source Text  → Lexer → Tokens → Parser → Scene
//! ```
//!
//! ## Example
//!
//! ```rust
//! use glam::DVec3;
//! use scad_geometry::GeometryNode;
//! use scad_scene::{parse, print, Scene};
//!
//! let root = GeometryNode::cube(DVec3::new(42.0, 42.0, 4.0), true).unwrap()
//!     - GeometryNode::cylinder(5.0, 10.0, true).unwrap();
//! let scene = Scene::new(root);
//! assert_eq!(parse(&print(&scene)).unwrap(), scene);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod scene;
pub mod span;

// Re-export public API
pub use error::{ParseError, ParseErrorKind};
pub use printer::{print, print_node};
pub use scene::Scene;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Parse scene source into a [`Scene`].
///
/// ## Parameters
///
/// - `source`: OpenSCAD source restricted to cube, cylinder, translate,
///   rotate, union, difference and the `$fn` directive
///
/// ## Example
///
/// ```rust
/// use scad_scene::parse;
///
/// let scene = parse("$fn = 64; translate([1, 2, 3]) cube(10);").unwrap();
/// assert_eq!(scene.resolution, 64);
/// ```
pub fn parse(source: &str) -> Result<Scene, ParseError> {
    let tokens = lexer::Lexer::new(source).tokenize();
    parser::Parser::new(tokens).parse_scene()
}
