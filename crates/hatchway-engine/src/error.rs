//! Error types for the Hatchway binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during startup, play, and export.

use crate::map_loader::MapError;

/// Top-level error for the Hatchway binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: hatchway_core::config::ConfigError,
    },

    /// The dungeon map could not be loaded.
    #[error("map error: {source}")]
    Map {
        /// The underlying map error.
        #[from]
        source: MapError,
    },

    /// The traversal aborted before reaching a terminal outcome.
    #[error("traversal error: {source}")]
    Traversal {
        /// The underlying traversal error.
        #[from]
        source: hatchway_core::traversal::TraversalError,
    },

    /// Exporting the history failed.
    #[error("history error: {source}")]
    History {
        /// The underlying history error.
        #[from]
        source: hatchway_core::history::HistoryError,
    },
}
