//! Traversal engine: the control loop that walks the dungeon.
//!
//! Each pass through the loop is in one of two phases:
//!
//! 1. **Entering** -- on a first visit, reset the per-visit kill multiset
//!    and charge the location's time cost. Then record a snapshot, stop on
//!    an exhausted budget, and stop with a win on a hatch location (after
//!    recording an extra `exit` snapshot).
//! 2. **Choosing** -- resolve the available actions, stop on a dead end,
//!    obtain a selection from the [`ChoiceSource`], and dispatch it:
//!    - `Quit` stops the run.
//!    - `Enter(child)` charges the child's cost, then enters the child as a
//!      first visit. The parent is never resumed.
//!    - `Fight(monster)` resolves combat, then re-enters the same location
//!      without resetting kills or recharging travel time.
//!    - `UseHatch(child)` with too little experience reports the shortfall
//!      and goes straight back to choosing, with no state change. Otherwise
//!      the hatch is entered as a first visit.
//!
//! Walking into a child replaces the current location instead of nesting a
//! call, so deep maps do not grow the stack.

use hatchway_types::{EXIT_LOCATION, LocationNode, TerminalReason, TraversalOutcome};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::budget::BudgetError;
use crate::choice::{ChoiceError, ChoiceSource};
use crate::combat::{self, CombatReport};
use crate::encounter::{self, Action};
use crate::player::PlayerState;
use crate::tokens;

/// Errors that abort a traversal.
///
/// Ordinary game endings are never errors; they are reported through
/// [`TraversalOutcome::reason`].
#[derive(Debug, thiserror::Error)]
pub enum TraversalError {
    /// Charging time overflowed.
    #[error("budget error: {source}")]
    Budget {
        /// The underlying budget error.
        #[from]
        source: BudgetError,
    },

    /// No selection could be obtained.
    #[error("choice error: {source}")]
    Choice {
        /// The underlying choice error.
        #[from]
        source: ChoiceError,
    },

    /// The choice source returned a number outside the presented range.
    #[error("selection {selection} out of range 1..={available}")]
    SelectionOutOfRange {
        /// The number returned by the choice source.
        selection: usize,
        /// Number of actions that were presented.
        available: usize,
    },
}

/// Notable moments during a traversal, for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalEvent<'a> {
    /// The player arrived at (or re-listed) a location and time was checked.
    Entered {
        /// Location identifier.
        location: &'a str,
        /// Whether this entry reset kills and charged travel time.
        first_visit: bool,
        /// Time left after any charge.
        remaining_time: Decimal,
    },
    /// A fight was resolved.
    MonsterDefeated(&'a CombatReport),
    /// A hatch was chosen without enough experience.
    HatchRefused {
        /// Identifier of the refused hatch.
        hatch: &'a str,
        /// Experience still missing.
        shortfall: u64,
    },
    /// The traversal stopped.
    Finished(&'a TraversalOutcome),
}

/// Callback invoked as the traversal progresses.
///
/// Implementations typically render player-facing messages. The callback
/// only observes; it cannot alter the run.
pub trait TraversalCallback {
    /// Called for each [`TraversalEvent`].
    fn on_event(&mut self, event: &TraversalEvent<'_>);
}

/// A callback that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl TraversalCallback for NoOpCallback {
    fn on_event(&mut self, _event: &TraversalEvent<'_>) {}
}

/// Loop phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Arriving at the current location (first visit or after a fight).
    Entering {
        /// Whether to reset kills and charge travel time.
        first_visit: bool,
    },
    /// Presenting choices at the current location.
    Choosing,
}

/// Walk the dungeon from `root` until a terminal outcome is reached.
///
/// `player` is mutated in place; its history holds every snapshot taken
/// and is ready for export when this returns.
///
/// # Errors
///
/// Returns [`TraversalError`] if time arithmetic overflows, the choice
/// source fails, or it returns a selection outside the presented range.
pub fn run_traversal<'m>(
    root: &'m LocationNode,
    player: &mut PlayerState,
    choices: &mut dyn ChoiceSource,
    callback: &mut dyn TraversalCallback,
) -> Result<TraversalOutcome, TraversalError> {
    let mut current: &'m LocationNode = root;
    let mut phase = Phase::Entering { first_visit: true };
    let mut choices_made: u64 = 0;

    info!(
        root = root.name(),
        required_experience = player.required_experience(),
        time_budget = %player.remaining_time(),
        "traversal starting"
    );

    loop {
        if let Phase::Entering { first_visit } = phase {
            if first_visit {
                player.reset_kills();
                player.apply_cost(current.name())?;
            }
            player.record(Some(current.name()), 0);
            callback.on_event(&TraversalEvent::Entered {
                location: current.name(),
                first_visit,
                remaining_time: player.remaining_time(),
            });

            if player.budget().is_exhausted() {
                return Ok(finish(player, TerminalReason::TimeExpired, choices_made, callback));
            }
            if tokens::is_hatch(player.location()) {
                player.record(Some(EXIT_LOCATION), 0);
                return Ok(finish(player, TerminalReason::Victory, choices_made, callback));
            }
            phase = Phase::Choosing;
        }

        let actions = encounter::available_actions(current, player.killed());
        if encounter::is_dead_end(&actions) {
            return Ok(finish(player, TerminalReason::DeadEnd, choices_made, callback));
        }

        let selection = choices.choose(player, &actions)?;
        choices_made = choices_made.saturating_add(1);
        let chosen = selection
            .checked_sub(1)
            .and_then(|index| actions.get(index))
            .copied()
            .ok_or(TraversalError::SelectionOutOfRange {
                selection,
                available: actions.len(),
            })?;
        debug!(location = current.name(), selection, action = %chosen, "action chosen");

        match chosen {
            Action::Quit => {
                return Ok(finish(player, TerminalReason::PlayerQuit, choices_made, callback));
            }
            Action::Enter(child) => {
                player.apply_cost(child.name())?;
                current = child;
                phase = Phase::Entering { first_visit: true };
            }
            Action::Fight(monster) => {
                let report = combat::fight(player, monster)?;
                callback.on_event(&TraversalEvent::MonsterDefeated(&report));
                phase = Phase::Entering { first_visit: false };
            }
            Action::UseHatch(hatch) => match player.experience_shortfall() {
                Some(shortfall) => {
                    debug!(hatch = hatch.name(), shortfall, "hatch refused");
                    callback.on_event(&TraversalEvent::HatchRefused {
                        hatch: hatch.name(),
                        shortfall,
                    });
                }
                None => {
                    current = hatch;
                    phase = Phase::Entering { first_visit: true };
                }
            },
        }
    }
}

/// Build the outcome, log it, and notify the callback.
fn finish(
    player: &PlayerState,
    reason: TerminalReason,
    choices_made: u64,
    callback: &mut dyn TraversalCallback,
) -> TraversalOutcome {
    let outcome = TraversalOutcome {
        reason,
        location: player.location().to_owned(),
        experience: player.experience(),
        remaining_time: player.remaining_time(),
        choices_made,
    };
    info!(
        reason = %outcome.reason,
        location = outcome.location,
        experience = outcome.experience,
        remaining_time = %outcome.remaining_time,
        choices_made,
        history_entries = player.history().len(),
        "traversal finished"
    );
    callback.on_event(&TraversalEvent::Finished(&outcome));
    outcome
}
