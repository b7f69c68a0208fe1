//! Odds comparison and parlay-pricing engine.
//!
//! Pure odds math (conversions, line matching, parlay combination,
//! EV/Kelly) plus a thin async client for the odds provider. The math
//! modules hold no state and perform no I/O.
pub mod config;
pub mod errors;
pub mod ev;
pub mod lines;
pub mod odds;
pub mod parlay;
pub mod provider;
pub mod scan;
