//! # Render Driver
//!
//! Writes `<out_dir>/<name>.scad`, then asks a [`Renderer`] for
//! `<out_dir>/<name>.stl`.

use std::fs;
use std::path::{Path, PathBuf};

use config::constants::{MESH_EXTENSION, SCENE_EXTENSION};
use scad_scene::{print, Scene};
use tracing::info;

use crate::error::RenderError;
use crate::renderer::Renderer;

/// Files produced by one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// Scene file handed to the renderer.
    pub scene_path: PathBuf,
    /// Mesh file the renderer wrote.
    pub mesh_path: PathBuf,
}

/// Scene writer bound to an output directory and a renderer.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use scad_geometry::GeometryNode;
/// use scad_render::{RenderDriver, StubRenderer};
/// use scad_scene::Scene;
///
/// let out_dir = std::env::temp_dir().join("scad-render-doc");
/// let driver = RenderDriver::new(StubRenderer::new(), &out_dir);
/// let scene = Scene::new(GeometryNode::cube(DVec3::splat(10.0), true).unwrap());
///
/// let output = driver.render(&scene, "block").unwrap();
/// assert!(output.mesh_path.ends_with("block.stl"));
/// # std::fs::remove_dir_all(out_dir).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RenderDriver<R> {
    renderer: R,
    out_dir: PathBuf,
}

impl<R: Renderer> RenderDriver<R> {
    /// Driver writing into `out_dir`, created on first write.
    pub fn new(renderer: R, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer,
            out_dir: out_dir.into(),
        }
    }

    /// Directory scene and mesh files are written to.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Renderer invoked by [`render`](Self::render).
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Path the scene for `name` is written to.
    pub fn scene_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{name}.{SCENE_EXTENSION}"))
    }

    /// Path the mesh for `name` is written to.
    pub fn mesh_path(&self, name: &str) -> PathBuf {
        self.out_dir.join(format!("{name}.{MESH_EXTENSION}"))
    }

    /// Print `scene` to `<out_dir>/<name>.scad`.
    pub fn write_scene(&self, scene: &Scene, name: &str) -> Result<PathBuf, RenderError> {
        check_name(name)?;
        fs::create_dir_all(&self.out_dir).map_err(|e| RenderError::io(&self.out_dir, e))?;

        let path = self.scene_path(name);
        let text = print(scene);
        fs::write(&path, &text).map_err(|e| RenderError::io(&path, e))?;

        info!(
            path = %path.display(),
            bytes = text.len(),
            resolution = scene.resolution,
            "scene written"
        );
        Ok(path)
    }

    /// Write the scene, then render it to `<out_dir>/<name>.stl`.
    pub fn render(&self, scene: &Scene, name: &str) -> Result<RenderOutput, RenderError> {
        let scene_path = self.write_scene(scene, name)?;
        let mesh_path = self.mesh_path(name);
        self.renderer.render(&scene_path, &mesh_path)?;
        Ok(RenderOutput {
            scene_path,
            mesh_path,
        })
    }
}

/// Names are bare file stems.
fn check_name(name: &str) -> Result<(), RenderError> {
    let bare = !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\']);
    if bare {
        Ok(())
    } else {
        Err(RenderError::InvalidName(name.to_string()))
    }
}

#[cfg(test)]
mod tests;
