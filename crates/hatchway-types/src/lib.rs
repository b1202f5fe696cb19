//! Shared type definitions for the Hatchway dungeon game.
//!
//! This crate holds the plain data that flows between the engine and its
//! collaborators: the static map tree handed to the engine at start, the
//! history snapshots it produces, and the summary of how a run ended.
//!
//! # Modules
//!
//! - [`location`] -- The nested location tree ([`LocationNode`], [`Content`])
//! - [`history`] -- Immutable state snapshots ([`HistoryEntry`])
//! - [`outcome`] -- Terminal reasons and the run summary ([`TraversalOutcome`])

pub mod history;
pub mod location;
pub mod outcome;

// Re-export all public types at crate root for convenience.
pub use history::{EXIT_LOCATION, HistoryEntry, INITIAL_LOCATION};
pub use location::{Content, LocationNode, LocationShapeError};
pub use outcome::{TerminalReason, TraversalOutcome};
