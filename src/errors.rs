/// Domain-specific error types for the odds engine.
/// Domain errors (bad probability, bad odds) are hard failures.
/// Missing coverage (no line for a book, no price for a leg) is NOT an
/// error: it is signaled by Option/None at the call site.
#[derive(Debug, thiserror::Error)]
pub enum OddsError {
    #[error("network error: {0}")]
    Network(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("odds API error: {status} {body}")]
    Api { status: u16, body: String },

    #[error("config error: {0}")]
    Config(String),

    #[error("probability out of range (0, 1): {0}")]
    InvalidProbability(f64),

    #[error("invalid odds value: {0}")]
    InvalidOdds(f64),
}

impl From<reqwest::Error> for OddsError {
    fn from(e: reqwest::Error) -> Self {
        OddsError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for OddsError {
    fn from(e: serde_json::Error) -> Self {
        OddsError::Parse(e.to_string())
    }
}

pub type OddsResult<T> = Result<T, OddsError>;
