//! BVMT Dashboard - data layer for the Tunis Stock Exchange dashboard
//!
//! Typed client for the dashboard REST API plus the view-model hooks the
//! views render from. Hooks fall back to a bundled sample dataset whenever
//! the live API fails or returns nothing.

pub mod client;
pub mod config;
pub mod error;
pub mod fallback;
pub mod hooks;
pub mod models;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_support;

pub use client::{ApiClient, CancelToken, DashboardApi, RequestOptions};
pub use config::ClientConfig;
pub use error::{ApiError, ErrorResponse, Result};
pub use hooks::{
    AlertsHook, FetchHook, FetchState, MarketOverviewHook, PortfolioHook, StockPredictionHook,
    StocksHook, ViewState,
};
pub use state::AppState;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber
///
/// `RUST_LOG` overrides the default filter. Returns `false` when a
/// subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bvmt_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        assert!(!init_tracing());
    }
}
