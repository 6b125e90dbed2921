//! Error types for scene loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading or validating a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    /// Scene file could not be read.
    #[error("Failed to read scene file {}: {}", .path.display(), .source)]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Scene file is not valid JSON or does not match the schema.
    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A collider has unusable geometry or layer.
    #[error("Collider {index} is invalid: {reason}")]
    InvalidCollider {
        /// Position in the collider list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// A listed ray has a non-finite origin or direction.
    #[error("Ray {index} is invalid: {reason}")]
    InvalidRay {
        /// Position in the ray list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Trace settings are out of range.
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}
