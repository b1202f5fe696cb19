//! Append-only history of player state snapshots.
//!
//! The [`HistoryLog`] is the single artifact a run produces. The engine
//! appends a [`HistoryEntry`] after every state-affecting step; nothing
//! ever removes or rewrites an entry. At game end the log is handed to a
//! [`HistorySink`] for export.

use hatchway_types::HistoryEntry;

/// Errors that can occur when exporting history.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// Export was attempted before any snapshot existed.
    ///
    /// Player state records entry #0 at construction, so this indicates a
    /// broken invariant rather than a recoverable condition.
    #[error("cannot export an empty history")]
    EmptyHistory,

    /// The sink failed to persist the entries.
    #[error("history sink error: {message}")]
    Sink {
        /// Description of the failure.
        message: String,
    },
}

/// Ordered, append-only sequence of snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryLog {
    /// Entries in the order they were recorded.
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a snapshot. Existing entries are left untouched.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Return all entries in recording order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Return the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return the entries, or [`HistoryError::EmptyHistory`] if there are none.
    ///
    /// Sinks call this before writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::EmptyHistory`] when the log is empty.
    pub fn non_empty_entries(&self) -> Result<&[HistoryEntry], HistoryError> {
        if self.entries.is_empty() {
            return Err(HistoryError::EmptyHistory);
        }
        Ok(&self.entries)
    }
}

/// A destination for the finished run history.
///
/// Implementations decide the format and location. The CSV file writer in
/// the `hatchway` binary is the production sink.
pub trait HistorySink {
    /// Persist every entry of `history`, in order, for the named player.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::EmptyHistory`] if `history` has no entries,
    /// or [`HistoryError::Sink`] if writing fails.
    fn export(&mut self, player_name: &str, history: &HistoryLog) -> Result<(), HistoryError>;
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order_and_prior_entries() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::now("entrance", 0));
        let first = log.entries().first().cloned().unwrap();

        log.append(HistoryEntry::now("tm10_entrance", 0));
        log.append(HistoryEntry::now("tm10_entrance", 50));

        assert_eq!(log.len(), 3);
        assert_eq!(log.entries().first(), Some(&first));
        assert_eq!(log.entries().last().map(|e| e.experience), Some(50));
    }

    #[test]
    fn empty_log_refuses_export() {
        let log = HistoryLog::new();
        assert!(log.is_empty());
        assert!(matches!(
            log.non_empty_entries(),
            Err(HistoryError::EmptyHistory)
        ));
    }
}
