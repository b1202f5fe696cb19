//! Player-facing narration of traversal events.

use std::io::Write;

use hatchway_core::traversal::{TraversalCallback, TraversalEvent};
use hatchway_types::TerminalReason;
use tracing::warn;

/// [`TraversalCallback`] that prints game messages to `W`.
///
/// Write failures are logged and otherwise ignored; narration never
/// aborts a run.
pub struct ConsoleNarrator<W> {
    output: W,
}

impl<W: Write> ConsoleNarrator<W> {
    /// Create a narrator writing to `output`.
    pub const fn new(output: W) -> Self {
        Self { output }
    }

    /// Consume the narrator and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    fn message(event: &TraversalEvent<'_>) -> Option<String> {
        match event {
            TraversalEvent::Entered { .. } => None,
            TraversalEvent::MonsterDefeated(report) => Some(format!(
                "Monster {} defeated, you gain {} experience point(s).",
                report.monster, report.experience_gained
            )),
            TraversalEvent::HatchRefused { shortfall, .. } => Some(format!(
                "Not enough experience to open the hatch: {shortfall} missing, \
                 fight monsters to gain more"
            )),
            TraversalEvent::Finished(outcome) => Some(
                match outcome.reason {
                    TerminalReason::TimeExpired => "You ran out of time! The game is over.\n",
                    TerminalReason::Victory => "You reached the hatch. Game completed",
                    TerminalReason::DeadEnd => "No new locations ahead. The game is over.",
                    TerminalReason::PlayerQuit => "Game ended by the player.",
                }
                .to_owned(),
            ),
        }
    }
}

impl<W: Write> TraversalCallback for ConsoleNarrator<W> {
    fn on_event(&mut self, event: &TraversalEvent<'_>) {
        let Some(message) = Self::message(event) else {
            return;
        };
        if let Err(e) = writeln!(self.output, "{message}") {
            warn!(error = %e, "failed to write narration");
        }
    }
}
