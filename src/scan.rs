//! One-shot opportunity scan over fetched odds.
//!
//! The reference book's two-way moneyline anchors a no-vig consensus;
//! every rival price is scored against it. Pure computation over the
//! fetched arrays. Logging and fetching live in main.
use crate::config::AppConfig;
use crate::ev::{expected_value, kelly_stake, no_vig_probabilities};
use crate::lines::{find_matching_lines, LineMatch};
use crate::provider::types::SportEvent;

/// Stake used when quoting EV, so values read as "dollars per $100".
const EV_REFERENCE_STAKE: f64 = 100.0;

/// A rival price that beats the no-vig consensus by more than the
/// configured threshold.
#[derive(Debug, Clone)]
pub struct Opportunity {
    pub sport: String,
    pub matchup: String,
    pub bookmaker: String,
    pub selection: String,
    /// American price at the rival book
    pub price: f64,
    /// No-vig consensus win probability from the reference book
    pub consensus_probability: f64,
    /// Expected value in dollars per $100 staked
    pub ev_per_100: f64,
    /// Fractional-Kelly stake against the configured bankroll
    pub stake: f64,
}

/// Scan a batch of events for positive-EV moneyline prices.
///
/// Events where the reference book does not post a full two-way
/// moneyline are skipped: no consensus, no score.
pub fn scan_moneylines(events: &[SportEvent], config: &AppConfig) -> Vec<Opportunity> {
    let mut opportunities = Vec::new();

    for event in events {
        let Some(reference) = event.bookmaker(&config.reference_book) else {
            continue;
        };
        let Some(market) = reference.market("h2h") else {
            continue;
        };
        if market.outcomes.len() != 2 {
            continue;
        }

        let side_a = &market.outcomes[0];
        let side_b = &market.outcomes[1];
        if side_a.price == 0.0 || side_b.price == 0.0 {
            continue;
        }
        let (prob_a, prob_b) = no_vig_probabilities(side_a.price, side_b.price);

        for book in &event.bookmakers {
            if book.key == config.reference_book {
                continue;
            }
            let Some(rival) = book.market("h2h") else {
                continue;
            };

            for (name, consensus) in [(&side_a.name, prob_a), (&side_b.name, prob_b)] {
                let Some(outcome) = rival.outcome_named(name) else {
                    continue;
                };
                if outcome.price == 0.0 {
                    continue;
                }

                let ev = expected_value(EV_REFERENCE_STAKE, outcome.price, consensus);
                if ev <= config.ev_threshold {
                    continue;
                }

                let stake = kelly_stake(
                    consensus,
                    outcome.price,
                    config.bankroll,
                    config.fractional_kelly,
                )
                .unwrap_or(0.0);

                opportunities.push(Opportunity {
                    sport: event.sport_key.clone(),
                    matchup: event.matchup(),
                    bookmaker: book.key.clone(),
                    selection: name.clone(),
                    price: outcome.price,
                    consensus_probability: consensus,
                    ev_per_100: ev,
                    stake,
                });
            }
        }
    }

    opportunities
}

/// Cross-book comparison of one event's total at the reference book's
/// main posted line. None when the reference book posts no total.
#[derive(Debug, Clone)]
pub struct TotalsComparison {
    pub matchup: String,
    pub point: f64,
    pub matches: Vec<LineMatch>,
}

pub fn compare_totals(event: &SportEvent, config: &AppConfig) -> Option<TotalsComparison> {
    let reference = event.bookmaker(&config.reference_book)?;
    let point = reference
        .market("totals")?
        .outcomes
        .iter()
        .find(|o| o.name == "Over")?
        .point?;

    Some(TotalsComparison {
        matchup: event.matchup(),
        point,
        matches: find_matching_lines(
            point,
            "totals",
            &event.bookmakers,
            Some("Over"),
            config.line_tolerance,
        ),
    })
}
