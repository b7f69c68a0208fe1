use crate::errors::{OddsError, OddsResult};
use crate::lines::DEFAULT_LINE_TOLERANCE;
use crate::parlay::DEFAULT_SGP_DISCOUNT;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub odds_api_key: String,
    pub odds_api_base_url: String,
    pub regions: String,
    pub scan_sports: Vec<String>,
    /// Book whose two-way prices anchor the no-vig consensus
    pub reference_book: String,
    pub line_tolerance: f64,
    pub sgp_discount: f64,
    pub fractional_kelly: f64,
    pub bankroll: f64,
    pub ev_threshold: f64,
}

impl AppConfig {
    pub fn from_env() -> OddsResult<Self> {
        dotenvy::dotenv().ok();

        let line_tolerance = env_var_or("LINE_TOLERANCE", &DEFAULT_LINE_TOLERANCE.to_string())
            .parse::<f64>()
            .map_err(|e| OddsError::Config(format!("LINE_TOLERANCE: {e}")))?;

        let sgp_discount = env_var_or("SGP_DISCOUNT", &DEFAULT_SGP_DISCOUNT.to_string())
            .parse::<f64>()
            .map_err(|e| OddsError::Config(format!("SGP_DISCOUNT: {e}")))?;

        let fractional_kelly = env_var_or("FRACTIONAL_KELLY", "0.25")
            .parse::<f64>()
            .map_err(|e| OddsError::Config(format!("FRACTIONAL_KELLY: {e}")))?;

        let bankroll = env_var_or("BANKROLL", "1000.0")
            .parse::<f64>()
            .map_err(|e| OddsError::Config(format!("BANKROLL: {e}")))?;

        let ev_threshold = env_var_or("EV_THRESHOLD", "0.0")
            .parse::<f64>()
            .map_err(|e| OddsError::Config(format!("EV_THRESHOLD: {e}")))?;

        let scan_sports = env_var_or("SCAN_SPORTS", "basketball_nba")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Ok(Self {
            odds_api_key: env_var("ODDS_API_KEY")?,
            odds_api_base_url: env_var_or(
                "ODDS_API_BASE_URL",
                "https://api.the-odds-api.com/v4",
            ),
            regions: env_var_or("ODDS_REGIONS", "us"),
            scan_sports,
            reference_book: env_var_or("REFERENCE_BOOK", "pinnacle"),
            line_tolerance,
            sgp_discount,
            fractional_kelly,
            bankroll,
            ev_threshold,
        })
    }
}

fn env_var(key: &str) -> OddsResult<String> {
    std::env::var(key).map_err(|_| OddsError::Config(format!("missing env var: {key}")))
}

fn env_var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
