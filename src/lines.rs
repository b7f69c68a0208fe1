//! Line matching across bookmakers.
//!
//! Books quote slightly different points for the same market (217.5 vs
//! 217.0). Tolerance matching plus a standard→alternate fallback lets a
//! comparison surface show true same-line odds across books instead of
//! spurious mismatches.
use crate::provider::types::{BookmakerOdds, MarketOdds};
use serde::{Deserialize, Serialize};

/// Matching tolerance for line points. A heuristic, not a validated
/// model; override through config where it matters.
pub const DEFAULT_LINE_TOLERANCE: f64 = 0.01;

/// One bookmaker's price at (or within tolerance of) a target line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsQuote {
    pub bookmaker: String,
    pub point: Option<f64>,
    /// American price
    pub price: f64,
    /// True when the match came from the alternate-line market
    pub is_alternate: bool,
}

/// Per-bookmaker result of a line search. `quote` is None when the book
/// has no coverage of the target line at all (an expected outcome, not
/// an error).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineMatch {
    pub bookmaker: String,
    pub quote: Option<OddsQuote>,
}

/// Fixed mapping from a standard market to its alternate-line
/// counterpart. Moneyline has no alternate listing.
#[inline]
pub fn alternate_market_for(market_key: &str) -> Option<&'static str> {
    match market_key {
        "totals" => Some("alternate_totals"),
        "spreads" => Some("alternate_spreads"),
        _ => None,
    }
}

/// Find each bookmaker's best match for `target_point` in `market_key`.
///
/// Per book: search the standard market first, then the alternate
/// counterpart. `selection` filters two-sided markets by outcome name
/// (e.g. "Over"). Output carries one entry per input bookmaker, in
/// input order, with `quote: None` for books without coverage.
pub fn find_matching_lines(
    target_point: f64,
    market_key: &str,
    bookmakers: &[BookmakerOdds],
    selection: Option<&str>,
    tolerance: f64,
) -> Vec<LineMatch> {
    bookmakers
        .iter()
        .map(|book| {
            let standard = book
                .market(market_key)
                .and_then(|m| match_outcome(m, target_point, selection, tolerance));

            let quote = match standard {
                Some((point, price)) => Some(OddsQuote {
                    bookmaker: book.key.clone(),
                    point: Some(point),
                    price,
                    is_alternate: false,
                }),
                None => alternate_market_for(market_key)
                    .and_then(|alt_key| book.market(alt_key))
                    .and_then(|m| match_outcome(m, target_point, selection, tolerance))
                    .map(|(point, price)| OddsQuote {
                        bookmaker: book.key.clone(),
                        point: Some(point),
                        price,
                        is_alternate: true,
                    }),
            };

            LineMatch {
                bookmaker: book.key.clone(),
                quote,
            }
        })
        .collect()
}

/// First outcome within tolerance of the target point, filtered by
/// selection name when given. Outcomes without a point never match.
fn match_outcome(
    market: &MarketOdds,
    target_point: f64,
    selection: Option<&str>,
    tolerance: f64,
) -> Option<(f64, f64)> {
    market
        .outcomes
        .iter()
        .filter(|o| selection.is_none_or(|s| o.name == s))
        .find_map(|o| {
            let point = o.point?;
            ((point - target_point).abs() <= tolerance).then_some((point, o.price))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::types::Outcome;

    fn outcome(name: &str, price: f64, point: f64) -> Outcome {
        Outcome {
            name: name.to_string(),
            price,
            point: Some(point),
            description: None,
        }
    }

    fn book(key: &str, markets: Vec<(&str, Vec<Outcome>)>) -> BookmakerOdds {
        BookmakerOdds {
            key: key.to_string(),
            title: None,
            last_update: None,
            markets: markets
                .into_iter()
                .map(|(k, outcomes)| MarketOdds {
                    key: k.to_string(),
                    last_update: None,
                    outcomes,
                })
                .collect(),
        }
    }

    #[test]
    fn test_standard_and_alternate_both_match() {
        let books = vec![
            book(
                "draftkings",
                vec![(
                    "totals",
                    vec![outcome("Over", -110.0, 217.5), outcome("Under", -110.0, 217.5)],
                )],
            ),
            book(
                "fanduel",
                vec![
                    ("totals", vec![outcome("Over", -112.0, 220.5)]),
                    ("alternate_totals", vec![outcome("Over", -125.0, 217.5)]),
                ],
            ),
        ];

        let matches = find_matching_lines(217.5, "totals", &books, Some("Over"), 0.01);
        assert_eq!(matches.len(), 2);

        let dk = matches[0].quote.as_ref().expect("draftkings covers 217.5");
        assert!(!dk.is_alternate, "standard listing must not be flagged");
        assert_eq!(dk.price, -110.0);

        let fd = matches[1].quote.as_ref().expect("fanduel covers 217.5 as alternate");
        assert!(fd.is_alternate, "alternate listing must be flagged");
        assert_eq!(fd.price, -125.0);
    }

    #[test]
    fn test_no_coverage_is_none() {
        let books = vec![book(
            "betmgm",
            vec![("totals", vec![outcome("Over", -110.0, 224.5)])],
        )];
        let matches = find_matching_lines(217.5, "totals", &books, Some("Over"), 0.01);
        assert!(matches[0].quote.is_none(), "off-line book must report None");
    }

    #[test]
    fn test_selection_filter() {
        let books = vec![book(
            "draftkings",
            vec![(
                "totals",
                vec![outcome("Over", -105.0, 217.5), outcome("Under", -115.0, 217.5)],
            )],
        )];

        let unders = find_matching_lines(217.5, "totals", &books, Some("Under"), 0.01);
        assert_eq!(unders[0].quote.as_ref().unwrap().price, -115.0);
    }

    #[test]
    fn test_tolerance_boundary() {
        let books = vec![book(
            "caesars",
            vec![("spreads", vec![outcome("Boston Celtics", -108.0, -6.5)])],
        )];

        // Within tolerance
        let hit = find_matching_lines(-6.505, "spreads", &books, None, 0.01);
        assert!(hit[0].quote.is_some());

        // A half-point off is a different line, not a match
        let miss = find_matching_lines(-7.0, "spreads", &books, None, 0.01);
        assert!(miss[0].quote.is_none());
    }

    #[test]
    fn test_moneyline_has_no_alternate() {
        assert_eq!(alternate_market_for("totals"), Some("alternate_totals"));
        assert_eq!(alternate_market_for("spreads"), Some("alternate_spreads"));
        assert_eq!(alternate_market_for("h2h"), None);
    }
}
