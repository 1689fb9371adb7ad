//! # Scene
//!
//! A geometry tree together with the global resolution directive.

use config::constants::SceneConfig;
use scad_geometry::GeometryNode;

/// Everything written to one scene file.
///
/// # Examples
/// ```
/// use glam::DVec3;
/// use scad_geometry::GeometryNode;
/// use scad_scene::Scene;
///
/// let scene = Scene::new(GeometryNode::cube(DVec3::splat(1.0), true).unwrap());
/// assert_eq!(scene.resolution, 200);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    /// Global `$fn` fragment count.
    pub resolution: u32,
    /// Root geometry node.
    pub root: GeometryNode,
}

impl Scene {
    /// Creates a scene with the default resolution.
    pub fn new(root: GeometryNode) -> Self {
        Self::with_config(root, SceneConfig::default())
    }

    /// Creates a scene using a validated configuration.
    pub fn with_config(root: GeometryNode, config: SceneConfig) -> Self {
        Self {
            resolution: config.resolution,
            root,
        }
    }
}
