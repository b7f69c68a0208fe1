//! Parlay pricing.
//!
//! Legs combine multiplicatively in decimal space. Same-game parlays get
//! a correlation discount on the excess-over-1 of the combined decimal
//! odds: correlated legs must not be priced as fully independent. The
//! discount is a heuristic approximation, not a correlation model.
use crate::odds::{american_to_decimal, decimal_to_american};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Fraction of excess decimal odds retained for same-game parlays.
pub const DEFAULT_SGP_DISCOUNT: f64 = 0.95;

/// One selected bet. `odds` maps bookmaker key → American price and may
/// be partial: not every book covers every leg.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParlayLeg {
    pub id: Uuid,
    pub sport: String,
    pub event_id: String,
    pub market: String,
    pub selection: String,
    pub point: Option<f64>,
    pub odds: HashMap<String, f64>,
}

impl ParlayLeg {
    pub fn new(
        sport: &str,
        event_id: &str,
        market: &str,
        selection: &str,
        point: Option<f64>,
        odds: HashMap<String, f64>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            sport: sport.to_string(),
            event_id: event_id.to_string(),
            market: market.to_string(),
            selection: selection.to_string(),
            point,
            odds,
        }
    }

    #[inline]
    pub fn price_at(&self, bookmaker: &str) -> Option<f64> {
        self.odds.get(bookmaker).copied()
    }

    /// Two legs on the same event/market/point conflict: either a
    /// duplicate or opposite sides of one line. Callers reject the
    /// incoming leg.
    #[inline]
    pub fn conflicts_with(&self, other: &ParlayLeg) -> bool {
        self.event_id == other.event_id
            && self.market == other.market
            && self.point == other.point
    }
}

/// Combined parlay price at one bookmaker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParlayPrice {
    pub decimal: f64,
    pub american: f64,
    pub same_game: bool,
}

#[inline]
pub fn is_same_game(legs: &[ParlayLeg]) -> bool {
    legs.len() > 1
        && legs
            .windows(2)
            .all(|pair| pair[0].event_id == pair[1].event_id)
}

/// Price a parlay at `bookmaker`, treating legs as independent.
///
/// Returns None when the book has no price for any leg: the parlay is
/// unavailable at that book, never priced with a substituted default.
pub fn combine_parlay_odds(legs: &[ParlayLeg], bookmaker: &str) -> Option<ParlayPrice> {
    if legs.is_empty() {
        return None;
    }

    let mut factors: smallvec::SmallVec<[f64; 8]> = smallvec::SmallVec::new();
    for leg in legs {
        let price = leg.price_at(bookmaker)?;
        if price == 0.0 {
            return None;
        }
        factors.push(american_to_decimal(price));
    }

    let decimal: f64 = factors.iter().product();
    Some(ParlayPrice {
        decimal,
        american: decimal_to_american(decimal),
        same_game: false,
    })
}

/// Price a same-game parlay: independent combination, then `discount`
/// applied to the excess-over-1 portion before reconversion.
pub fn combine_sgp_odds(
    legs: &[ParlayLeg],
    bookmaker: &str,
    discount: f64,
) -> Option<ParlayPrice> {
    let independent = combine_parlay_odds(legs, bookmaker)?;
    let decimal = 1.0 + (independent.decimal - 1.0) * discount;
    Some(ParlayPrice {
        decimal,
        american: decimal_to_american(decimal),
        same_game: true,
    })
}

/// Price a parlay, auto-detecting the same-game case.
pub fn price_parlay(legs: &[ParlayLeg], bookmaker: &str, sgp_discount: f64) -> Option<ParlayPrice> {
    if is_same_game(legs) {
        combine_sgp_odds(legs, bookmaker, sgp_discount)
    } else {
        combine_parlay_odds(legs, bookmaker)
    }
}
