//! Dungeon map loading.
//!
//! A map file is a JSON object with exactly one key, the root location,
//! whose value lists monsters (strings) and child locations (nested
//! single-key objects). Shape validation lives in
//! [`LocationNode`]'s deserializer; this module only adds file access.

use std::path::Path;

use hatchway_types::LocationNode;
use tracing::{debug, info};

/// Errors that can occur when loading a map.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    /// The map file could not be read.
    #[error("cannot read map file {path}: {source}")]
    Io {
        /// Path that was attempted.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The document is not valid JSON or not a valid location tree.
    #[error("invalid map document: {source}")]
    Json {
        /// The underlying decode error.
        #[from]
        source: serde_json::Error,
    },
}

/// Read and decode the map at `path`.
///
/// # Errors
///
/// Returns [`MapError::Io`] if the file cannot be read, or
/// [`MapError::Json`] if its content is not a valid map.
pub fn load_map(path: &Path) -> Result<LocationNode, MapError> {
    let contents = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let root = parse_map(&contents)?;
    info!(path = %path.display(), root = root.name(), "map loaded");
    Ok(root)
}

/// Decode a map document from a JSON string.
///
/// # Errors
///
/// Returns [`MapError::Json`] on a syntax or shape error.
pub fn parse_map(json: &str) -> Result<LocationNode, MapError> {
    let root: LocationNode = serde_json::from_str(json)?;
    debug!(
        root = root.name(),
        contents = root.contents().len(),
        children = root.children().count(),
        "map decoded"
    );
    Ok(root)
}
