use super::view_model::{ViewModel, ViewState};
use crate::client::DashboardApi;
use crate::fallback;
use crate::models::StockQuote;
use crate::services::StocksService;
use std::sync::Arc;

/// Market table rows
pub struct StocksHook {
    api: Arc<dyn DashboardApi>,
    model: ViewModel<Vec<StockQuote>>,
}

impl StocksHook {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            model: ViewModel::new("StocksHook", fallback::stocks(), true),
        }
    }

    pub async fn mount(&self) -> ViewState<Vec<StockQuote>> {
        self.model
            .load(StocksService::get_stocks(self.api.as_ref()), fallback::stocks)
            .await
    }

    pub fn snapshot(&self) -> ViewState<Vec<StockQuote>> {
        self.model.snapshot()
    }

    pub fn unmount(&self) {
        self.model.cancel();
    }
}
