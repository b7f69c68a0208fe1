//! American / decimal / implied-probability odds conversions.
//!
//! American odds are signed: +150 pays $150 profit on a $100 stake,
//! -150 requires a $150 stake to profit $100. Decimal odds are the
//! total return multiple (stake included), so -110 is 1.9091.
//!
//! All functions are pure. This is the single source of truth for
//! conversions; nothing else in the crate reimplements them.
use crate::errors::{OddsError, OddsResult};

/// Convert American odds to decimal odds.
///
/// Odds of exactly 0 are invalid by convention; callers must guard.
#[inline]
pub fn american_to_decimal(odds: f64) -> f64 {
    if odds > 0.0 {
        1.0 + odds / 100.0
    } else {
        1.0 + 100.0 / odds.abs()
    }
}

/// Convert decimal odds back to American, rounded to the nearest integer.
#[inline]
pub fn decimal_to_american(decimal: f64) -> f64 {
    if decimal >= 2.0 {
        ((decimal - 1.0) * 100.0).round()
    } else {
        (-100.0 / (decimal - 1.0)).round()
    }
}

/// Implied win probability encoded by an American price, ignoring margin.
///
/// Degenerate input 0 maps to probability 0; callers should avoid it.
#[inline]
pub fn implied_probability(odds: f64) -> f64 {
    if odds > 0.0 {
        100.0 / (odds + 100.0)
    } else if odds < 0.0 {
        odds.abs() / (odds.abs() + 100.0)
    } else {
        0.0
    }
}

/// Inverse of `implied_probability`, rounded to the nearest integer.
/// Probabilities at or above 0.5 map to negative (favorite) prices.
#[inline]
pub fn probability_to_american(probability: f64) -> OddsResult<f64> {
    if probability <= 0.0 || probability >= 1.0 {
        return Err(OddsError::InvalidProbability(probability));
    }

    let odds = if probability >= 0.5 {
        -(probability / (1.0 - probability)) * 100.0
    } else {
        ((1.0 - probability) / probability) * 100.0
    };

    Ok(odds.round())
}
