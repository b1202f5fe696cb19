//! Immutable snapshots of player state, one per state-affecting step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Pseudo-location the player occupies before the first step.
pub const INITIAL_LOCATION: &str = "entrance";

/// Pseudo-location recorded once the player climbs out through a hatch.
pub const EXIT_LOCATION: &str = "exit";

/// A snapshot of where the player was, how much experience they had, and
/// when the snapshot was taken.
///
/// Entries are created by the history recorder and never mutated after
/// being appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Location identifier at the time of the snapshot.
    pub location: String,
    /// Cumulative experience at the time of the snapshot.
    pub experience: u64,
    /// Wall-clock time the snapshot was taken.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a snapshot stamped with the current wall-clock time.
    pub fn now(location: impl Into<String>, experience: u64) -> Self {
        Self {
            location: location.into(),
            experience,
            timestamp: Utc::now(),
        }
    }
}
