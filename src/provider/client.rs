use super::types::{SportEvent, SportInfo};
use crate::errors::{OddsError, OddsResult};
use reqwest::Client;

/// Odds provider REST client. All methods return Result, never panic.
/// The API key travels as a query parameter, per the provider contract.
#[derive(Clone)]
pub struct OddsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OddsClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(10))
                .pool_max_idle_per_host(4)
                .build()
                .unwrap_or_default(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> OddsResult<T> {
        let mut parts: smallvec::SmallVec<[String; 6]> = smallvec::SmallVec::new();
        parts.push(format!("apiKey={}", self.api_key));
        for (k, v) in params {
            if !v.is_empty() {
                parts.push(format!("{k}={v}"));
            }
        }
        let url = format!("{}{}?{}", self.base_url, path, parts.join("&"));

        let resp = self.client.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(OddsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        resp.json::<T>()
            .await
            .map_err(|e| OddsError::Parse(format!("GET {path}: {e}")))
    }

    // ── Endpoints ──

    pub async fn get_sports(&self) -> OddsResult<Vec<SportInfo>> {
        self.get("/sports", &[]).await
    }

    /// Featured-market odds for every upcoming event in a sport.
    pub async fn get_odds(
        &self,
        sport: &str,
        regions: &str,
        markets: &str,
    ) -> OddsResult<Vec<SportEvent>> {
        self.get(
            &format!("/sports/{sport}/odds"),
            &[
                ("regions", regions),
                ("markets", markets),
                ("oddsFormat", "american"),
            ],
        )
        .await
    }

    /// Full odds for one event, including alternate and prop markets.
    pub async fn get_event_odds(
        &self,
        sport: &str,
        event_id: &str,
        regions: &str,
        markets: &str,
    ) -> OddsResult<SportEvent> {
        self.get(
            &format!("/sports/{sport}/events/{event_id}/odds"),
            &[
                ("regions", regions),
                ("markets", markets),
                ("oddsFormat", "american"),
            ],
        )
        .await
    }
}

/// Fetch odds for several sports concurrently. Individual failures are
/// logged and nulled out; the batch itself always completes.
pub async fn fetch_all_odds(
    client: &OddsClient,
    sports: &[String],
    regions: &str,
    markets: &str,
) -> Vec<Option<Vec<SportEvent>>> {
    let fetches = sports
        .iter()
        .map(|sport| client.get_odds(sport, regions, markets));

    futures_util::future::join_all(fetches)
        .await
        .into_iter()
        .zip(sports)
        .map(|(result, sport)| match result {
            Ok(events) => {
                tracing::debug!(sport = %sport, events = events.len(), "odds fetched");
                Some(events)
            }
            Err(e) => {
                tracing::warn!(sport = %sport, error = %e, "odds fetch failed");
                None
            }
        })
        .collect()
}
