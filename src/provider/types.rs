use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ── Wire contract: The Odds API v4 ──
//
// Fields the provider sometimes omits are Option so a sparse payload
// never fails deserialization.

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportInfo {
    pub key: String,
    pub group: Option<String>,
    pub title: Option<String>,
    pub active: Option<bool>,
    pub has_outrights: Option<bool>,
}

/// A single game with odds from every returned bookmaker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SportEvent {
    pub id: String,
    pub sport_key: String,
    pub sport_title: Option<String>,
    pub commence_time: Option<DateTime<Utc>>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    #[serde(default)]
    pub bookmakers: Vec<BookmakerOdds>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookmakerOdds {
    pub key: String,
    pub title: Option<String>,
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub markets: Vec<MarketOdds>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketOdds {
    pub key: String,
    pub last_update: Option<DateTime<Utc>>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

/// One priced selection. `price` is American odds. `point` is present for
/// spreads/totals/props; `description` carries the player name on props.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub point: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl SportEvent {
    #[inline]
    pub fn bookmaker(&self, key: &str) -> Option<&BookmakerOdds> {
        self.bookmakers.iter().find(|b| b.key == key)
    }

    #[inline]
    pub fn matchup(&self) -> String {
        format!(
            "{} @ {}",
            self.away_team.as_deref().unwrap_or("?"),
            self.home_team.as_deref().unwrap_or("?"),
        )
    }
}

impl BookmakerOdds {
    #[inline]
    pub fn market(&self, key: &str) -> Option<&MarketOdds> {
        self.markets.iter().find(|m| m.key == key)
    }
}

impl MarketOdds {
    #[inline]
    pub fn outcome_named(&self, name: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}
