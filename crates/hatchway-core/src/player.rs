//! Mutable player state threaded through the traversal.
//!
//! A single [`PlayerState`] is created at game start and exclusively owned
//! by the traversal engine for the whole run. It bundles the current
//! location, accumulated experience, the time budget, the per-visit kill
//! multiset, the experience threshold that gates hatches, and the history
//! log. The history recorder lives here as [`PlayerState::record`].

use std::collections::BTreeMap;

use hatchway_types::{HistoryEntry, INITIAL_LOCATION};
use rust_decimal::Decimal;
use tracing::debug;

use crate::budget::{BudgetError, TimeBudget};
use crate::history::HistoryLog;

/// Per-visit kill multiset: monster identifier to number of kills.
pub type KillCounts = BTreeMap<String, u32>;

/// All mutable state of the single player.
#[derive(Debug, Clone)]
pub struct PlayerState {
    /// Display name used in the status line and export messages.
    name: String,
    /// Identifier of the current location.
    location: String,
    /// Accumulated experience (never decreases).
    experience: u64,
    /// Remaining time.
    budget: TimeBudget,
    /// Monsters killed since the last first-time entry into a location.
    killed: KillCounts,
    /// Experience needed to use a hatch.
    required_experience: u64,
    /// Snapshots recorded so far.
    history: HistoryLog,
}

impl PlayerState {
    /// Create a player at the entrance with zero experience.
    ///
    /// Records history entry #0 immediately, so the log is never empty.
    pub fn new(name: impl Into<String>, required_experience: u64, time_budget: Decimal) -> Self {
        let mut player = Self {
            name: name.into(),
            location: INITIAL_LOCATION.to_owned(),
            experience: 0,
            budget: TimeBudget::new(time_budget),
            killed: KillCounts::new(),
            required_experience,
            history: HistoryLog::new(),
        };
        player.record(None, 0);
        player
    }

    /// Return the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Return the current location identifier.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Return the accumulated experience.
    pub const fn experience(&self) -> u64 {
        self.experience
    }

    /// Return the time left.
    pub const fn remaining_time(&self) -> Decimal {
        self.budget.remaining()
    }

    /// Return the time budget.
    pub const fn budget(&self) -> &TimeBudget {
        &self.budget
    }

    /// Return the experience threshold for hatches.
    pub const fn required_experience(&self) -> u64 {
        self.required_experience
    }

    /// Return the per-visit kill multiset.
    pub const fn killed(&self) -> &KillCounts {
        &self.killed
    }

    /// Return the history recorded so far.
    pub const fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Experience still missing before a hatch can be used, if any.
    pub fn experience_shortfall(&self) -> Option<u64> {
        self.required_experience
            .checked_sub(self.experience)
            .filter(|&lack| lack > 0)
    }

    /// Append a snapshot of the current state to the history.
    ///
    /// `location`, when given, replaces the current location before the
    /// snapshot is taken; `experience_delta` is added to the experience the
    /// same way.
    pub fn record(&mut self, location: Option<&str>, experience_delta: u64) {
        if let Some(location) = location {
            location.clone_into(&mut self.location);
        }
        self.gain_experience(experience_delta);
        self.history
            .append(HistoryEntry::now(self.location.as_str(), self.experience));
        debug!(
            location = self.location,
            experience = self.experience,
            entries = self.history.len(),
            "state recorded"
        );
    }

    /// Charge the time cost embedded in `identifier`.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if the subtraction overflows.
    pub fn apply_cost(&mut self, identifier: &str) -> Result<Decimal, BudgetError> {
        self.budget.apply_cost(identifier)
    }

    /// Add experience, saturating at `u64::MAX`.
    pub const fn gain_experience(&mut self, amount: u64) {
        self.experience = self.experience.saturating_add(amount);
    }

    /// Count one more kill of `monster` during the current visit.
    pub fn mark_killed(&mut self, monster: &str) {
        let count = self.killed.entry(monster.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Forget every kill of the current visit.
    pub fn reset_kills(&mut self) {
        self.killed.clear();
    }
}

impl core::fmt::Display for PlayerState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Player {} is here: {}, experience: {}, time remaining: {} s.",
            self.name,
            self.location,
            self.experience,
            self.budget.remaining()
        )
    }
}
