//! The player's time budget.
//!
//! The budget is a [`Decimal`] countdown. Entering locations and fighting
//! monsters subtract the time cost embedded in their identifiers. The game
//! is lost once the budget reaches zero or below, so every deduction is
//! exact -- binary floating point would drift across many small costs.

use rust_decimal::Decimal;
use tracing::debug;

use crate::tokens;

/// Errors that can occur while charging time.
#[derive(Debug, thiserror::Error)]
pub enum BudgetError {
    /// Subtracting the cost would leave the representable decimal range.
    #[error("time budget overflow: cannot subtract {cost} from {remaining}")]
    Overflow {
        /// Budget before the failed deduction.
        remaining: Decimal,
        /// Cost that could not be subtracted.
        cost: Decimal,
    },
}

/// Remaining time, monotonically non-increasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBudget {
    /// Time left, in the same units as the identifier cost tokens.
    remaining: Decimal,
}

impl TimeBudget {
    /// Create a budget holding `initial` units of time.
    pub const fn new(initial: Decimal) -> Self {
        Self { remaining: initial }
    }

    /// Return the time left.
    pub const fn remaining(&self) -> Decimal {
        self.remaining
    }

    /// Whether the budget has run out (zero or below).
    pub fn is_exhausted(&self) -> bool {
        self.remaining <= Decimal::ZERO
    }

    /// Charge the time cost embedded in `identifier`.
    ///
    /// An identifier without a cost token charges nothing. Returns the cost
    /// that was subtracted.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if the subtraction overflows.
    pub fn apply_cost(&mut self, identifier: &str) -> Result<Decimal, BudgetError> {
        let cost = tokens::time_cost(identifier);
        self.charge(cost)?;
        debug!(identifier, %cost, remaining = %self.remaining, "time charged");
        Ok(cost)
    }

    /// Subtract an explicit cost.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::Overflow`] if the subtraction overflows.
    pub fn charge(&mut self, cost: Decimal) -> Result<(), BudgetError> {
        self.remaining = self
            .remaining
            .checked_sub(cost)
            .ok_or(BudgetError::Overflow {
                remaining: self.remaining,
                cost,
            })?;
        Ok(())
    }
}
