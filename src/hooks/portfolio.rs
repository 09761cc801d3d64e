use super::view_model::{ViewModel, ViewState};
use crate::client::DashboardApi;
use crate::fallback;
use crate::models::Portfolio;
use crate::services::PortfolioService;
use std::sync::Arc;

/// Holdings table and summary card
pub struct PortfolioHook {
    api: Arc<dyn DashboardApi>,
    model: ViewModel<Portfolio>,
}

impl PortfolioHook {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            model: ViewModel::new("PortfolioHook", fallback::portfolio(), true),
        }
    }

    pub async fn mount(&self) -> ViewState<Portfolio> {
        self.model
            .load(PortfolioService::get_portfolio(self.api.as_ref()), fallback::portfolio)
            .await
    }

    pub fn snapshot(&self) -> ViewState<Portfolio> {
        self.model.snapshot()
    }

    pub fn unmount(&self) {
        self.model.cancel();
    }
}
