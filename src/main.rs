use sharpline::provider::client::{fetch_all_odds, OddsClient};
use sharpline::{config, scan};

#[tokio::main]
async fn main() {
    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("sharpline scan starting");

    let cfg = match config::AppConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    let client = OddsClient::new(&cfg.odds_api_base_url, &cfg.odds_api_key);

    // Fan out across sports; individual failures are nulled, not fatal
    let batches = fetch_all_odds(&client, &cfg.scan_sports, &cfg.regions, "h2h,totals").await;

    let events: Vec<_> = batches.into_iter().flatten().flatten().collect();
    if events.is_empty() {
        tracing::warn!("no events fetched, nothing to scan");
        return;
    }
    tracing::info!(events = events.len(), "scanning fetched events");

    // ── Moneyline EV scan ──

    let opportunities = scan::scan_moneylines(&events, &cfg);
    if opportunities.is_empty() {
        tracing::info!("no prices beat the no-vig consensus");
    }
    for opp in &opportunities {
        tracing::info!(
            sport = %opp.sport,
            matchup = %opp.matchup,
            book = %opp.bookmaker,
            selection = %opp.selection,
            price = opp.price,
            consensus_prob = opp.consensus_probability,
            ev_per_100 = opp.ev_per_100,
            stake = opp.stake,
            "positive EV price"
        );
    }

    // ── Totals line comparison at the reference book's main line ──

    for event in &events {
        let Some(comparison) = scan::compare_totals(event, &cfg) else {
            continue;
        };

        for line_match in &comparison.matches {
            match &line_match.quote {
                Some(quote) if quote.is_alternate => {
                    tracing::info!(
                        matchup = %comparison.matchup,
                        book = %line_match.bookmaker,
                        point = comparison.point,
                        price = quote.price,
                        "line carried only as an alternate"
                    );
                }
                Some(quote) => {
                    tracing::debug!(
                        matchup = %comparison.matchup,
                        book = %line_match.bookmaker,
                        point = comparison.point,
                        price = quote.price,
                        "standard line match"
                    );
                }
                None => {
                    tracing::debug!(
                        matchup = %comparison.matchup,
                        book = %line_match.bookmaker,
                        point = comparison.point,
                        "no coverage at this line"
                    );
                }
            }
        }
    }

    tracing::info!("scan complete");
}
