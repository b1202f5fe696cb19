//! Combat resolution.
//!
//! Fighting always succeeds: the monster's embedded experience is granted,
//! its embedded time cost is charged, and the kill is counted against the
//! current visit so the encounter resolver stops offering that instance.

use rust_decimal::Decimal;
use tracing::debug;

use crate::budget::BudgetError;
use crate::player::PlayerState;
use crate::tokens;

/// What a fight produced, for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    /// Identifier of the defeated monster.
    pub monster: String,
    /// Experience granted (zero when the identifier has no reward token).
    pub experience_gained: u64,
    /// Time charged (zero when the identifier has no cost token).
    pub time_spent: Decimal,
}

/// Fight one instance of `monster`.
///
/// Adds the reward to the player's experience, charges the monster's time
/// cost and increments its per-visit kill count. No other state changes.
///
/// # Errors
///
/// Returns [`BudgetError::Overflow`] if charging time overflows; the
/// experience has already been granted in that case.
pub fn fight(player: &mut PlayerState, monster: &str) -> Result<CombatReport, BudgetError> {
    let experience_gained = tokens::experience_reward(monster);
    player.gain_experience(experience_gained);
    let time_spent = player.apply_cost(monster)?;
    player.mark_killed(monster);

    debug!(
        monster,
        experience_gained,
        %time_spent,
        experience = player.experience(),
        "monster defeated"
    );

    Ok(CombatReport {
        monster: monster.to_owned(),
        experience_gained,
        time_spent,
    })
}
