//! How a traversal ended.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The reason a traversal stopped.
///
/// Every run ends in exactly one of these. None of them is an error: they
/// are ordinary game outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalReason {
    /// The time budget dropped to zero or below.
    TimeExpired,
    /// The player reached a hatch location.
    Victory,
    /// Nothing left to do but quit: no live monsters and no exits.
    DeadEnd,
    /// The player chose to quit.
    PlayerQuit,
}

impl TerminalReason {
    /// Whether this outcome counts as winning the game.
    pub const fn is_victory(self) -> bool {
        matches!(self, Self::Victory)
    }
}

impl core::fmt::Display for TerminalReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::TimeExpired => "time expired",
            Self::Victory => "victory",
            Self::DeadEnd => "dead end",
            Self::PlayerQuit => "player quit",
        };
        f.write_str(label)
    }
}

/// Summary of a finished traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalOutcome {
    /// Why the traversal stopped.
    pub reason: TerminalReason,
    /// Location the player was at when it stopped.
    pub location: String,
    /// Experience accumulated over the run.
    pub experience: u64,
    /// Time budget left (zero or negative on [`TerminalReason::TimeExpired`]).
    pub remaining_time: Decimal,
    /// Number of selections obtained from the choice source.
    pub choices_made: u64,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn only_victory_is_victory() {
        assert!(TerminalReason::Victory.is_victory());
        assert!(!TerminalReason::TimeExpired.is_victory());
        assert!(!TerminalReason::DeadEnd.is_victory());
        assert!(!TerminalReason::PlayerQuit.is_victory());
    }

    #[test]
    fn outcome_serializes_time_as_decimal_string() {
        let outcome = TraversalOutcome {
            reason: TerminalReason::TimeExpired,
            location: "tm10_start".to_owned(),
            experience: 0,
            remaining_time: dec!(-5),
            choices_made: 0,
        };
        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["reason"], "TimeExpired");
        assert_eq!(value["remaining_time"], "-5");
    }
}
