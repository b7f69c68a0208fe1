//! Expected value, no-vig de-margining, Kelly sizing, and closing line
//! value. All functions are pure and synchronous; they fail only via
//! explicit domain checks.
use crate::errors::{OddsError, OddsResult};
use crate::odds::{american_to_decimal, implied_probability};

/// Profit on a winning wager of `bet_amount` at American `odds`.
#[inline]
pub fn profit_if_win(bet_amount: f64, odds: f64) -> f64 {
    if odds > 0.0 {
        bet_amount * odds / 100.0
    } else {
        bet_amount * 100.0 / odds.abs()
    }
}

/// Expected value of a wager: `p * profit + (1 - p) * (-bet)`.
#[inline]
pub fn expected_value(bet_amount: f64, odds: f64, estimated_probability: f64) -> f64 {
    let p = estimated_probability;
    p * profit_if_win(bet_amount, odds) + (1.0 - p) * (-bet_amount)
}

/// De-margin a two-way market: each side's implied probability
/// normalized by the pair sum, removing the bookmaker's built-in edge.
#[inline]
pub fn no_vig_probabilities(odds_a: f64, odds_b: f64) -> (f64, f64) {
    let prob_a = implied_probability(odds_a);
    let prob_b = implied_probability(odds_b);
    let total = prob_a + prob_b;
    if total <= 0.0 {
        return (0.0, 0.0);
    }
    (prob_a / total, prob_b / total)
}

/// Bookmaker margin (vig) across all listed outcomes, as a percentage:
/// sum of implied probabilities minus 1.
#[inline]
pub fn market_margin(odds: &[f64]) -> f64 {
    let total: f64 = odds.iter().map(|&o| implied_probability(o)).sum();
    (total - 1.0) * 100.0
}

/// Fractional-Kelly stake: `f* = (b*p - q) / b` with `b` the net decimal
/// odds, clamped at zero (no short-selling), scaled by bankroll and
/// `fraction` (e.g. 0.25 for quarter-Kelly).
pub fn kelly_stake(
    probability: f64,
    odds: f64,
    bankroll: f64,
    fraction: f64,
) -> OddsResult<f64> {
    if probability <= 0.0 || probability >= 1.0 {
        return Err(OddsError::InvalidProbability(probability));
    }
    if odds == 0.0 {
        return Err(OddsError::InvalidOdds(odds));
    }

    let b = american_to_decimal(odds) - 1.0;
    if b <= 0.0 {
        return Ok(0.0);
    }

    let q = 1.0 - probability;
    let kelly = (b * probability - q) / b;

    Ok(kelly.max(0.0) * bankroll * fraction)
}

/// Closing line value: percent change in implied probability between
/// the placed price and the closing price. Positive means the bet beat
/// the close.
#[inline]
pub fn closing_line_value(placed_odds: f64, closing_odds: f64) -> f64 {
    let placed = implied_probability(placed_odds);
    let closing = implied_probability(closing_odds);
    if placed <= 0.0 {
        return 0.0;
    }
    (closing - placed) / placed * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ev_signs() {
        // 60% to win at +150 is a strongly positive wager
        let ev = expected_value(100.0, 150.0, 0.6);
        assert!(ev > 0.0, "EV should be positive: {ev}");
        assert!((ev - 50.0).abs() < 1e-9, "0.6*150 - 0.4*100 = 50: {ev}");

        // 40% at -150 loses money
        let ev = expected_value(100.0, -150.0, 0.4);
        assert!(ev < 0.0, "EV should be negative: {ev}");
    }

    #[test]
    fn test_fair_price_zero_ev() {
        // +100 at a true coin flip is exactly fair
        let ev = expected_value(100.0, 100.0, 0.5);
        assert!(ev.abs() < 1e-9, "fair price EV should be 0: {ev}");
    }

    #[test]
    fn test_no_vig_even_market() {
        let (a, b) = no_vig_probabilities(-110.0, -110.0);
        assert!((a - 0.5).abs() < 1e-9, "symmetric market de-margins to 0.5: {a}");
        assert!((a + b - 1.0).abs() < 1e-9, "no-vig probabilities sum to 1");
    }

    #[test]
    fn test_no_vig_preserves_favorite() {
        let (fav, dog) = no_vig_probabilities(-200.0, 170.0);
        assert!(fav > dog, "favorite keeps the larger share");
        assert!((fav + dog - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_margin() {
        // -110/-110 carries the classic ~4.76% vig
        let margin = market_margin(&[-110.0, -110.0]);
        assert!((margin - 4.7619).abs() < 0.001, "standard vig ~4.76%: {margin}");

        // +100/-100 sums to exactly 1 implied probability
        let fair = market_margin(&[100.0, -100.0]);
        assert!(fair.abs() < 1e-9, "even pair has zero margin: {fair}");
    }

    #[test]
    fn test_kelly_with_edge_bets() {
        let stake = kelly_stake(0.6, -110.0, 1000.0, 1.0).unwrap();
        assert!(stake > 0.0, "edge should produce a stake: {stake}");
        // b = 10/11, f* = (b*0.6 - 0.4)/b = 0.16
        assert!((stake - 160.0).abs() < 0.5, "full Kelly ~$160: {stake}");
    }

    #[test]
    fn test_kelly_no_edge_no_bet() {
        let stake = kelly_stake(0.4, -110.0, 1000.0, 1.0).unwrap();
        assert_eq!(stake, 0.0, "negative Kelly clamps to zero");
    }

    #[test]
    fn test_fractional_kelly_scales() {
        let full = kelly_stake(0.6, -110.0, 1000.0, 1.0).unwrap();
        let quarter = kelly_stake(0.6, -110.0, 1000.0, 0.25).unwrap();
        assert!((quarter - full / 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_kelly_domain_errors() {
        assert!(kelly_stake(0.0, -110.0, 1000.0, 1.0).is_err());
        assert!(kelly_stake(1.0, -110.0, 1000.0, 1.0).is_err());
        assert!(kelly_stake(0.6, 0.0, 1000.0, 1.0).is_err());
    }

    #[test]
    fn test_clv() {
        // Placed +110, closed -110: the market moved toward the bet
        let clv = closing_line_value(110.0, -110.0);
        assert!(clv > 0.0, "beating the close is positive CLV: {clv}");

        // Placed -110, closed +110: bet got worse
        let clv = closing_line_value(-110.0, 110.0);
        assert!(clv < 0.0, "losing to the close is negative CLV: {clv}");

        assert_eq!(closing_line_value(-110.0, -110.0), 0.0);
    }
}
