use super::view_model::{ViewModel, ViewState};
use crate::client::DashboardApi;
use crate::fallback;
use crate::models::MarketOverview;
use crate::services::MarketService;
use std::sync::Arc;

/// TUNINDEX and TUNINDEX20 cards
pub struct MarketOverviewHook {
    api: Arc<dyn DashboardApi>,
    model: ViewModel<MarketOverview>,
}

impl MarketOverviewHook {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            model: ViewModel::new("MarketOverviewHook", fallback::market_summary(), true),
        }
    }

    pub async fn mount(&self) -> ViewState<MarketOverview> {
        self.model
            .load(MarketService::get_overview(self.api.as_ref()), fallback::market_summary)
            .await
    }

    pub fn snapshot(&self) -> ViewState<MarketOverview> {
        self.model.snapshot()
    }

    pub fn unmount(&self) {
        self.model.cancel();
    }
}
