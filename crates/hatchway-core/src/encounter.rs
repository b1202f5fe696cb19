//! Encounter resolution: which actions are available at a location.
//!
//! The resolver is recomputed every time choices are presented. It walks
//! the location's content list in map order and emits one action per
//! element that is still available, followed by a trailing [`Action::Quit`].
//!
//! ## Monster bookkeeping
//!
//! 1. Count the instances of each monster identifier in the content list.
//! 2. Subtract the kills recorded for this visit. Counts may go negative
//!    and anything at or below zero is not offered.
//! 3. While walking the list, each monster entry is offered only while its
//!    remaining count is positive, and the count is decremented as it is
//!    offered. Duplicate entries are therefore offered one at a time, in
//!    list order, up to the number still alive.

use std::collections::BTreeMap;

use hatchway_types::{Content, LocationNode};

use crate::player::KillCounts;
use crate::tokens;

/// Something the player can do at the current location.
///
/// Actions borrow from the map tree, which outlives the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<'m> {
    /// Fight one instance of a monster.
    Fight(&'m str),
    /// Step into a neighbouring location.
    Enter(&'m LocationNode),
    /// Climb out through a hatch (gated by experience).
    UseHatch(&'m LocationNode),
    /// End the game.
    Quit,
}

/// Discriminant of an [`Action`], without the borrowed payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    /// See [`Action::Fight`].
    Fight,
    /// See [`Action::Enter`].
    Enter,
    /// See [`Action::UseHatch`].
    UseHatch,
    /// See [`Action::Quit`].
    Quit,
}

impl Action<'_> {
    /// Return the kind of this action.
    pub const fn kind(&self) -> ActionKind {
        match self {
            Self::Fight(_) => ActionKind::Fight,
            Self::Enter(_) => ActionKind::Enter,
            Self::UseHatch(_) => ActionKind::UseHatch,
            Self::Quit => ActionKind::Quit,
        }
    }

    /// Human-readable description shown to the player.
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for Action<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fight(monster) => {
                write!(f, "Fight the monster {monster} and gain experience")
            }
            Self::Enter(location) => {
                write!(f, "Step further into the location {}", location.name())
            }
            Self::UseHatch(location) => {
                write!(f, "Climb out through the HATCH {}", location.name())
            }
            Self::Quit => f.write_str("End the current game."),
        }
    }
}

/// Compute the ordered list of actions available at `location`.
///
/// `killed` is the per-visit kill multiset. The returned list always ends
/// with [`Action::Quit`].
pub fn available_actions<'m>(location: &'m LocationNode, killed: &KillCounts) -> Vec<Action<'m>> {
    let mut remaining: BTreeMap<&str, i64> = BTreeMap::new();
    for monster in location.monsters() {
        let count = remaining.entry(monster).or_insert(0);
        *count = count.saturating_add(1);
    }
    for (monster, &kills) in killed {
        let count = remaining.entry(monster.as_str()).or_insert(0);
        *count = count.saturating_sub(i64::from(kills));
    }

    let mut actions = Vec::with_capacity(location.contents().len().saturating_add(1));
    for content in location.contents() {
        match content {
            Content::Child(child) if tokens::is_hatch(child.name()) => {
                actions.push(Action::UseHatch(child));
            }
            Content::Child(child) => actions.push(Action::Enter(child)),
            Content::Monster(monster) => {
                if let Some(count) = remaining.get_mut(monster.as_str())
                    && *count > 0
                {
                    *count = count.saturating_sub(1);
                    actions.push(Action::Fight(monster.as_str()));
                }
            }
        }
    }
    actions.push(Action::Quit);
    actions
}

/// Whether the action list leaves nothing to do but quit.
///
/// True when no monster is left to fight and no child location or hatch
/// is reachable. A location that still holds live monsters is not a dead
/// end yet, even without exits: it becomes one once they are all killed.
pub fn is_dead_end(actions: &[Action<'_>]) -> bool {
    actions.iter().all(|action| action.kind() == ActionKind::Quit)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn kinds(actions: &[Action<'_>]) -> Vec<ActionKind> {
        actions.iter().map(Action::kind).collect()
    }

    fn sample_location() -> LocationNode {
        LocationNode::new(
            "Location_0_tm0",
            vec![
                Content::monster("Mob_exp10_tm0"),
                Content::child(LocationNode::new("Location_1_tm1040", vec![])),
                Content::monster("Mob_exp10_tm0"),
                Content::monster("Boss_exp40_tm20"),
                Content::child(LocationNode::new("Hatch_tm159.098765432", vec![])),
            ],
        )
    }

    #[test]
    fn preserves_content_order_and_appends_quit() {
        let location = sample_location();
        let actions = available_actions(&location, &KillCounts::new());
        assert_eq!(
            kinds(&actions),
            vec![
                ActionKind::Fight,
                ActionKind::Enter,
                ActionKind::Fight,
                ActionKind::Fight,
                ActionKind::UseHatch,
                ActionKind::Quit,
            ]
        );
        assert_eq!(actions.last(), Some(&Action::Quit));
    }

    #[test]
    fn killed_instances_are_not_offered_again() {
        let location = sample_location();
        let killed = KillCounts::from([("Mob_exp10_tm0".to_owned(), 1)]);
        let actions = available_actions(&location, &killed);

        let fights: Vec<&str> = actions
            .iter()
            .filter_map(|a| match a {
                Action::Fight(m) => Some(*m),
                _ => None,
            })
            .collect();
        assert_eq!(fights, vec!["Mob_exp10_tm0", "Boss_exp40_tm20"]);
    }

    #[test]
    fn over_subtracted_kills_offer_nothing() {
        let location = sample_location();
        let killed = KillCounts::from([("Mob_exp10_tm0".to_owned(), 5)]);
        let actions = available_actions(&location, &killed);
        let goblins = actions
            .iter()
            .filter(|a| matches!(a, Action::Fight("Mob_exp10_tm0")))
            .count();
        assert_eq!(goblins, 0);
    }

    #[test]
    fn kills_of_absent_monsters_are_ignored() {
        let location = sample_location();
        let killed = KillCounts::from([("Ghost_exp5_tm1".to_owned(), 3)]);
        let actions = available_actions(&location, &killed);
        assert_eq!(actions.len(), 6);
    }

    #[test]
    fn hatch_classification_ignores_case() {
        let location = LocationNode::new(
            "room",
            vec![Content::child(LocationNode::new("SECRET_HATCH_tm1", vec![]))],
        );
        let actions = available_actions(&location, &KillCounts::new());
        assert_eq!(kinds(&actions), vec![ActionKind::UseHatch, ActionKind::Quit]);
    }

    #[test]
    fn live_monsters_postpone_the_dead_end() {
        let location = LocationNode::new("tm10_entrance", vec![Content::monster("exp50_rat")]);
        let actions = available_actions(&location, &KillCounts::new());
        assert!(!is_dead_end(&actions));

        let killed = KillCounts::from([("exp50_rat".to_owned(), 1)]);
        let actions = available_actions(&location, &killed);
        assert!(is_dead_end(&actions));
    }

    #[test]
    fn dead_end_when_nothing_but_quit_remains() {
        let location = LocationNode::new("tm10_entrance", vec![]);
        let actions = available_actions(&location, &KillCounts::new());
        assert_eq!(actions, vec![Action::Quit]);
        assert!(is_dead_end(&actions));
    }

    #[test]
    fn hatch_alone_is_not_a_dead_end() {
        let location = LocationNode::new(
            "room",
            vec![
                Content::monster("exp50_rat"),
                Content::child(LocationNode::new("tm0_hatch_exit", vec![])),
            ],
        );
        let actions = available_actions(&location, &KillCounts::new());
        assert!(!is_dead_end(&actions));
    }

    #[test]
    fn descriptions_name_the_target() {
        let location = sample_location();
        let actions = available_actions(&location, &KillCounts::new());
        let descriptions: Vec<String> = actions.iter().map(Action::description).collect();
        assert!(descriptions.first().unwrap().contains("Mob_exp10_tm0"));
        assert!(descriptions.get(1).unwrap().contains("Location_1_tm1040"));
        assert!(descriptions.get(4).unwrap().contains("HATCH"));
        assert_eq!(descriptions.last().unwrap(), "End the current game.");
    }
}
