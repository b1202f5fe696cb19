//! Parsing of the tokens embedded in location and monster identifiers.
//!
//! Identifiers are free-form strings that carry their game data inline:
//!
//! - `tm<decimal>` -- time cost, e.g. `Location_1_tm1040` costs 1040.
//! - `exp<integer>_` -- experience reward, e.g. `Mob_exp10_tm0` grants 10.
//! - `hatch` (any case) -- marks an exit location.
//!
//! Absent or unparsable tokens are not errors. Not every identifier embeds
//! a cost or a reward, so a missing token reads as zero.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Substring that marks a location as a hatch exit (compared lowercase).
pub const HATCH_MARKER: &str = "hatch";

/// `tm` followed by digits and dots; the first match wins.
static TIME_COST: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"tm([0-9.]+)").ok());

/// `exp` followed by digits and an underscore; the first match wins.
static EXPERIENCE_REWARD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"exp([0-9]+)_").ok());

/// Return the first capture group of `pattern` in `identifier`, if any.
fn capture<'a>(pattern: &LazyLock<Option<Regex>>, identifier: &'a str) -> Option<&'a str> {
    pattern
        .as_ref()?
        .captures(identifier)?
        .get(1)
        .map(|m| m.as_str())
}

/// Extract the time cost embedded in an identifier.
///
/// Returns [`Decimal::ZERO`] when the identifier carries no `tm` token or
/// the token does not form a valid decimal (e.g. `tm1.2.3`).
pub fn time_cost(identifier: &str) -> Decimal {
    let Some(raw) = capture(&TIME_COST, identifier) else {
        debug!(identifier, "no time cost token, treating as zero");
        return Decimal::ZERO;
    };

    let token = raw.trim_end_matches('.');
    match Decimal::from_str(token) {
        Ok(cost) => cost,
        Err(e) => {
            warn!(identifier, token, error = %e, "unparsable time cost token, treating as zero");
            Decimal::ZERO
        }
    }
}

/// Extract the experience reward embedded in an identifier.
///
/// Returns 0 when the identifier carries no `exp..._` token or the number
/// does not fit in a `u64`.
pub fn experience_reward(identifier: &str) -> u64 {
    let Some(token) = capture(&EXPERIENCE_REWARD, identifier) else {
        debug!(identifier, "no experience token, treating as zero");
        return 0;
    };

    token.parse().unwrap_or_else(|e| {
        warn!(identifier, token, error = %e, "experience token out of range, treating as zero");
        0
    })
}

/// Whether an identifier carries the hatch marker, ignoring case.
pub fn is_hatch(identifier: &str) -> bool {
    identifier.to_lowercase().contains(HATCH_MARKER)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn integer_time_cost() {
        assert_eq!(time_cost("tm10_entrance"), dec!(10));
        assert_eq!(time_cost("Location_1_tm1040"), dec!(1040));
    }

    #[test]
    fn fractional_time_cost_keeps_every_digit() {
        assert_eq!(time_cost("Hatch_tm159.098765432"), dec!(159.098765432));
    }

    #[test]
    fn missing_time_cost_is_zero() {
        assert_eq!(time_cost("exp50_rat"), Decimal::ZERO);
        assert_eq!(time_cost(""), Decimal::ZERO);
    }

    #[test]
    fn trailing_dot_is_ignored() {
        assert_eq!(time_cost("Room_tm12._north"), dec!(12));
    }

    #[test]
    fn malformed_time_cost_is_zero() {
        assert_eq!(time_cost("Room_tm1.2.3"), Decimal::ZERO);
        assert_eq!(time_cost("Room_tm."), Decimal::ZERO);
    }

    #[test]
    fn first_time_token_wins() {
        assert_eq!(time_cost("tm5_then_tm7"), dec!(5));
    }

    #[test]
    fn experience_reward_parses_digits_before_underscore() {
        assert_eq!(experience_reward("exp50_rat"), 50);
        assert_eq!(experience_reward("Boss101_exp100_tm60"), 100);
    }

    #[test]
    fn experience_requires_trailing_underscore() {
        assert_eq!(experience_reward("Mob_exp10"), 0);
        assert_eq!(experience_reward("tm10_entrance"), 0);
    }

    #[test]
    fn oversized_experience_is_zero() {
        assert_eq!(experience_reward("exp99999999999999999999999_x"), 0);
    }

    #[test]
    fn hatch_marker_is_case_insensitive() {
        assert!(is_hatch("tm0_hatch_exit"));
        assert!(is_hatch("Hatch_tm159.098765432"));
        assert!(is_hatch("TRAPDOOR_HATCH"));
        assert!(!is_hatch("Location_B1_tm2200"));
    }
}
