//! # Renderers
//!
//! A [`Renderer`] turns a scene file on disk into a mesh file on disk.
//!
//! - [`OpenScadRenderer`]: runs `openscad -o <mesh> <scene>`
//! - [`StubRenderer`]: writes an empty ASCII STL, for tests and dry runs

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use config::constants::DEFAULT_RENDERER_BINARY;
use tracing::{info, warn};

use crate::error::RenderError;

// =============================================================================
// RENDERER TRAIT
// =============================================================================

/// Converts a scene file into a mesh file.
pub trait Renderer {
    /// Render `scene` and write the result to `mesh`.
    fn render(&self, scene: &Path, mesh: &Path) -> Result<(), RenderError>;
}

impl<R: Renderer + ?Sized> Renderer for &R {
    fn render(&self, scene: &Path, mesh: &Path) -> Result<(), RenderError> {
        (**self).render(scene, mesh)
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&self, scene: &Path, mesh: &Path) -> Result<(), RenderError> {
        (**self).render(scene, mesh)
    }
}

// =============================================================================
// OPENSCAD
// =============================================================================

/// Runs the OpenSCAD command-line renderer.
///
/// ## Example
///
/// ```rust
/// use scad_render::OpenScadRenderer;
///
/// let renderer = OpenScadRenderer::new("/opt/openscad/bin/openscad");
/// assert_eq!(renderer.binary().to_str(), Some("/opt/openscad/bin/openscad"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenScadRenderer {
    binary: PathBuf,
}

impl OpenScadRenderer {
    /// Use `binary`, either a path or a name resolved on `PATH`.
    pub fn new(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Binary this renderer invokes.
    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Default for OpenScadRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_RENDERER_BINARY)
    }
}

impl Renderer for OpenScadRenderer {
    fn render(&self, scene: &Path, mesh: &Path) -> Result<(), RenderError> {
        info!(
            binary = %self.binary.display(),
            scene = %scene.display(),
            mesh = %mesh.display(),
            "starting renderer"
        );

        // A mesh left by an earlier run must not pass the existence check.
        match fs::remove_file(mesh) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(RenderError::io(mesh, err)),
        }

        let output = Command::new(&self.binary)
            .arg("-o")
            .arg(mesh)
            .arg(scene)
            .output()
            .map_err(|source| RenderError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = ?output.status.code(), stderr = %stderr, "renderer failed");
            return Err(RenderError::RendererFailed {
                status: output.status.code(),
                stderr,
            });
        }

        if !mesh.is_file() {
            return Err(RenderError::MissingMesh {
                path: mesh.to_path_buf(),
            });
        }

        info!(mesh = %mesh.display(), "renderer finished");
        Ok(())
    }
}

// =============================================================================
// STUB
// =============================================================================

/// Writes a solid with no facets instead of rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubRenderer {
    fail: bool,
}

impl StubRenderer {
    /// Stub that always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stub that always reports a renderer failure.
    pub fn failing() -> Self {
        Self { fail: true }
    }
}

impl Renderer for StubRenderer {
    fn render(&self, scene: &Path, mesh: &Path) -> Result<(), RenderError> {
        if !scene.is_file() {
            return Err(RenderError::io(
                scene,
                std::io::Error::new(std::io::ErrorKind::NotFound, "scene file not found"),
            ));
        }
        if self.fail {
            warn!(scene = %scene.display(), "stub renderer configured to fail");
            return Err(RenderError::RendererFailed {
                status: Some(1),
                stderr: "stub renderer configured to fail".to_string(),
            });
        }

        let name = mesh
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        fs::write(mesh, format!("solid {name}\nendsolid {name}\n"))
            .map_err(|source| RenderError::io(mesh, source))?;

        info!(mesh = %mesh.display(), "stub mesh written");
        Ok(())
    }
}
