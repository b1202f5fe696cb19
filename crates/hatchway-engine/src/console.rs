//! Interactive console prompt.
//!
//! [`ConsoleChoiceSource`] shows the player's status and the numbered
//! action list, then reads lines until one holds a number in range.
//! Reader and writer are generic so tests can drive it with in-memory
//! buffers.

use std::io::{self, BufRead, Write};

use hatchway_core::choice::{ChoiceError, ChoiceSource};
use hatchway_core::encounter::Action;
use hatchway_core::player::PlayerState;
use tracing::debug;

/// Prompt-driven [`ChoiceSource`] reading from `R` and writing to `W`.
pub struct ConsoleChoiceSource<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleChoiceSource<R, W> {
    /// Create a prompt over the given input and output streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompt and return its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Read lines until one is a valid 1-based selection.
    fn read_selection(&mut self, available: usize) -> Result<usize, ChoiceError> {
        let mut line = String::new();
        loop {
            writeln!(self.output, "Enter a number:")?;
            self.output.flush()?;

            line.clear();
            match self.input.read_line(&mut line) {
                Ok(0) => return Err(ChoiceError::Closed),
                Ok(_) => {}
                // The offending line is consumed; treat it like any other garbage.
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!(error = %e, "undecodable selection");
                    writeln!(self.output, "Letters are not allowed. Try again")?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
            let raw = line.trim();

            if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
                debug!(input = raw, "non-numeric selection");
                writeln!(self.output, "Letters are not allowed. Try again")?;
                continue;
            }
            match raw.parse::<usize>() {
                Ok(selection) if (1..=available).contains(&selection) => return Ok(selection),
                _ => {
                    debug!(input = raw, available, "selection out of range");
                    writeln!(self.output, "Invalid input. Try again")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> ChoiceSource for ConsoleChoiceSource<R, W> {
    fn choose(
        &mut self,
        player: &PlayerState,
        actions: &[Action<'_>],
    ) -> Result<usize, ChoiceError> {
        writeln!(self.output, "Your current state")?;
        writeln!(self.output, "{player}")?;
        writeln!(self.output)?;
        writeln!(self.output, "Choose your next action:")?;
        for (number, action) in (1_usize..).zip(actions) {
            writeln!(self.output, "{number}. {action}")?;
        }

        let selection = self.read_selection(actions.len())?;
        if let Some(action) = selection.checked_sub(1).and_then(|i| actions.get(i)) {
            writeln!(self.output, "You chose: {action}")?;
            writeln!(self.output)?;
        }
        Ok(selection)
    }
}
