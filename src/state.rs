//! Application state management

use crate::client::{ApiClient, DashboardApi};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::hooks::{
    AlertsHook, MarketOverviewHook, PortfolioHook, StockPredictionHook, StocksHook,
};
use std::sync::Arc;
use tracing::info;

/// Shared by every view: the API client and the source the hooks read from
///
/// Each hook constructor returns a fresh hook; hooks never share state.
pub struct AppState {
    /// Client for the full endpoint catalogue
    pub client: Arc<ApiClient>,

    /// Data source of the view hooks
    pub api: Arc<dyn DashboardApi>,
}

impl AppState {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Arc::new(ApiClient::new(config)?);
        info!("AppState initialized for {}", client.base_url());
        Ok(Self {
            api: client.clone(),
            client,
        })
    }

    /// Configuration from `BVMT_API_URL` / `BVMT_API_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::new(&ClientConfig::from_env()?)
    }

    /// Hooks read from `api` instead of the client
    pub fn with_api(mut self, api: Arc<dyn DashboardApi>) -> Self {
        self.api = api;
        self
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn stocks_hook(&self) -> StocksHook {
        StocksHook::new(self.api.clone())
    }

    pub fn market_overview_hook(&self) -> MarketOverviewHook {
        MarketOverviewHook::new(self.api.clone())
    }

    pub fn portfolio_hook(&self) -> PortfolioHook {
        PortfolioHook::new(self.api.clone())
    }

    pub fn prediction_hook(&self, code: impl Into<String>) -> StockPredictionHook {
        StockPredictionHook::new(self.api.clone(), code)
    }

    pub fn alerts_hook(&self) -> AlertsHook {
        AlertsHook::new(self.api.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;
    use crate::test_support::{listing, unused_base_url, FakeApi, Scripted};

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(AppState::new(&ClientConfig::new("not a url")).is_err());
    }

    #[tokio::test]
    async fn test_hooks_are_independent() {
        let api = Arc::new(FakeApi::default());
        api.stocks
            .lock()
            .push(Scripted::ok(vec![listing("BIAT", Some(118.5), Some(2.0))]));
        let state = AppState::new(&ClientConfig::new(unused_base_url()))
            .unwrap()
            .with_api(api);

        let first = state.stocks_hook();
        let second = state.stocks_hook();
        assert!(!first.mount().await.using_mock);
        assert!(second.mount().await.using_mock);
        assert_eq!(second.snapshot().data, fallback::stocks());
        assert_eq!(first.snapshot().data.len(), 1);
    }
}
