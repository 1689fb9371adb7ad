//! # Render Errors

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing a scene or producing its mesh.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Output name is empty or names a path instead of a file stem.
    #[error("invalid output name {0:?}")]
    InvalidName(String),

    /// Filesystem operation failed.
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Renderer process could not be started.
    #[error("failed to start renderer {}: {source}", .binary.display())]
    Spawn {
        /// Binary that was invoked.
        binary: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// Renderer ran but reported failure.
    #[error("renderer exited with {}: {stderr}", exit_code(.status))]
    RendererFailed {
        /// Exit code; `None` when terminated by a signal.
        status: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// Renderer reported success without writing the mesh.
    #[error("renderer produced no mesh at {}", .path.display())]
    MissingMesh {
        /// Expected mesh path.
        path: PathBuf,
    },
}

fn exit_code(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
