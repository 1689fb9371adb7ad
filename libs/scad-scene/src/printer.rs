//! # Scene Printer
//!
//! Serializes a [`Scene`] to OpenSCAD source.
//!
//! Arguments are always named and sorted, transforms always open a block,
//! and numbers use Rust's shortest round-trip formatting, so printing the
//! parsed output of [`print`] reproduces it byte for byte.

use glam::DVec3;
use scad_geometry::GeometryNode;

use crate::scene::Scene;

const INDENT: &str = "\t";

/// Prints a scene: the `$fn` directive, a blank line, then the tree.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use scad_geometry::GeometryNode;
/// use scad_scene::{print, Scene};
///
/// let scene = Scene::new(GeometryNode::cylinder(4.0, 2.5, true).unwrap());
/// assert_eq!(print(&scene), "$fn = 200;\n\ncylinder(center = true, d = 4, h = 2.5);\n");
/// ```
pub fn print(scene: &Scene) -> String {
    let mut out = format!("$fn = {};\n\n", scene.resolution);
    print_node_into(&mut out, &scene.root, 0);
    out
}

/// Prints a single node without any directive.
pub fn print_node(node: &GeometryNode) -> String {
    let mut out = String::new();
    print_node_into(&mut out, node, 0);
    out
}

fn print_node_into(out: &mut String, node: &GeometryNode, depth: usize) {
    let pad = INDENT.repeat(depth);
    match node {
        GeometryNode::Cube { size, center } => {
            out.push_str(&format!(
                "{pad}cube(center = {center}, size = {});\n",
                vector(*size)
            ));
        }
        GeometryNode::Cylinder {
            diameter,
            height,
            center,
        } => {
            out.push_str(&format!(
                "{pad}cylinder(center = {center}, d = {}, h = {});\n",
                number(*diameter),
                number(*height)
            ));
        }
        GeometryNode::Translate { offset, child } => {
            out.push_str(&format!("{pad}translate(v = {}) {{\n", vector(*offset)));
            print_node_into(out, child, depth + 1);
            out.push_str(&format!("{pad}}}\n"));
        }
        GeometryNode::Rotate { angles, child } => {
            out.push_str(&format!("{pad}rotate(a = {}) {{\n", vector(*angles)));
            print_node_into(out, child, depth + 1);
            out.push_str(&format!("{pad}}}\n"));
        }
        GeometryNode::Union { children } | GeometryNode::Difference { children } => {
            out.push_str(&format!("{pad}{}() {{\n", node.kind().keyword()));
            for child in children {
                print_node_into(out, child, depth + 1);
            }
            out.push_str(&format!("{pad}}}\n"));
        }
    }
}

fn number(value: f64) -> String {
    value.to_string()
}

fn vector(v: DVec3) -> String {
    format!("[{}, {}, {}]", number(v.x), number(v.y), number(v.z))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_nested_blocks() {
        let node = (GeometryNode::cube(DVec3::new(42.0, 42.0, 4.0), false).unwrap()
            - GeometryNode::cylinder(4.0, 4.0, true)
                .unwrap()
                .translate(DVec3::new(-20.0, 20.0, 0.0)))
        .rotate(DVec3::new(90.0, 0.0, 0.0));

        let expected = "\
rotate(a = [90, 0, 0]) {
\tdifference() {
\t\tcube(center = false, size = [42, 42, 4]);
\t\ttranslate(v = [-20, 20, 0]) {
\t\t\tcylinder(center = true, d = 4, h = 4);
\t\t}
\t}
}
";
        assert_eq!(print_node(&node), expected);
    }

    #[test]
    fn test_print_directive_uses_scene_resolution() {
        let mut scene = Scene::new(GeometryNode::cube(DVec3::splat(1.0), true).unwrap());
        scene.resolution = 64;
        assert!(print(&scene).starts_with("$fn = 64;\n\n"));
    }

    #[test]
    fn test_number_formatting() {
        assert_eq!(number(20.0), "20");
        assert_eq!(number(-0.5), "-0.5");
        assert_eq!(number(98.00000000000001), "98.00000000000001");
    }
}
