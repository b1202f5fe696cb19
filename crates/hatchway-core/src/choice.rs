//! Choice source trait and scripted implementation.
//!
//! At every decision point the traversal engine presents the player state
//! and the numbered list of available actions to a [`ChoiceSource`] and
//! waits for a selection. The trait abstracts how that selection is
//! obtained -- a console prompt, a scripted replay, or a test stub.
//!
//! Selections are 1-based, matching the numbering shown to the player.
//! Validating raw input and re-prompting on garbage is the source's job;
//! the engine only rejects a selection outside `1..=actions.len()`.

use std::collections::VecDeque;

use crate::encounter::Action;
use crate::player::PlayerState;

/// Errors that can occur while obtaining a selection.
#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    /// The input stream ended before a valid selection was read.
    #[error("input closed before a selection was made")]
    Closed,

    /// Reading input or writing the prompt failed.
    #[error("choice I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// A scripted source ran out of selections.
    #[error("scripted choices exhausted after {used} selections")]
    Exhausted {
        /// Number of selections already handed out.
        used: usize,
    },
}

/// A source of player selections.
pub trait ChoiceSource {
    /// Present `actions` (numbered from 1) to the player and return the
    /// chosen number.
    ///
    /// `player` is read-only context for status display.
    ///
    /// # Errors
    ///
    /// Returns [`ChoiceError`] if no selection can be obtained at all.
    fn choose(
        &mut self,
        player: &PlayerState,
        actions: &[Action<'_>],
    ) -> Result<usize, ChoiceError>;
}

/// Replays a fixed sequence of selections.
///
/// Useful for tests and for scripted walkthroughs of a known map.
#[derive(Debug, Clone, Default)]
pub struct ScriptedChoices {
    /// Selections not yet handed out.
    pending: VecDeque<usize>,
    /// Selections handed out so far.
    used: usize,
}

impl ScriptedChoices {
    /// Create a source that will return `selections` in order.
    pub fn new(selections: impl IntoIterator<Item = usize>) -> Self {
        Self {
            pending: selections.into_iter().collect(),
            used: 0,
        }
    }
}

impl ChoiceSource for ScriptedChoices {
    fn choose(
        &mut self,
        _player: &PlayerState,
        _actions: &[Action<'_>],
    ) -> Result<usize, ChoiceError> {
        let selection = self
            .pending
            .pop_front()
            .ok_or(ChoiceError::Exhausted { used: self.used })?;
        self.used = self.used.saturating_add(1);
        Ok(selection)
    }
}
