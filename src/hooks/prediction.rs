use super::view_model::{ViewModel, ViewState};
use crate::client::types::StockPrediction;
use crate::client::DashboardApi;
use crate::fallback;
use crate::services::PredictionService;
use parking_lot::RwLock;
use std::sync::Arc;

/// Five-day forecast of one stock
///
/// Without a stock code the hook stays idle: no fetch, no data.
pub struct StockPredictionHook {
    api: Arc<dyn DashboardApi>,
    code: RwLock<String>,
    model: ViewModel<Option<StockPrediction>>,
}

impl StockPredictionHook {
    pub fn new(api: Arc<dyn DashboardApi>, code: impl Into<String>) -> Self {
        let code = code.into();
        let loading = !code.is_empty();
        Self {
            api,
            code: RwLock::new(code),
            model: ViewModel::new("StockPredictionHook", None, loading),
        }
    }

    pub fn code(&self) -> String {
        self.code.read().clone()
    }

    pub async fn mount(&self) -> ViewState<Option<StockPrediction>> {
        let code = self.code();
        if code.is_empty() {
            self.model.settle(None);
            return self.model.snapshot();
        }

        let fetch = async {
            PredictionService::get_prediction(self.api.as_ref(), &code)
                .await
                .map(|prediction| prediction.map(Some))
        };
        self.model
            .load(fetch, || Some(fallback::prediction(&code)))
            .await
    }

    /// Switch to another stock; the fetch for the previous one is cancelled
    pub async fn set_code(&self, code: impl Into<String>) -> ViewState<Option<StockPrediction>> {
        let code = code.into();
        if *self.code.read() == code {
            return self.model.snapshot();
        }

        self.model.cancel();
        *self.code.write() = code;
        self.mount().await
    }

    pub fn snapshot(&self) -> ViewState<Option<StockPrediction>> {
        self.model.snapshot()
    }

    pub fn unmount(&self) {
        self.model.cancel();
    }
}
