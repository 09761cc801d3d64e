use super::view_model::{ViewModel, ViewState};
use crate::client::DashboardApi;
use crate::fallback;
use crate::models::AlertView;
use crate::services::AlertsService;
use std::sync::Arc;

/// Alerts panel
pub struct AlertsHook {
    api: Arc<dyn DashboardApi>,
    model: ViewModel<Vec<AlertView>>,
}

impl AlertsHook {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            model: ViewModel::new("AlertsHook", fallback::alerts(), true),
        }
    }

    pub async fn mount(&self) -> ViewState<Vec<AlertView>> {
        self.model
            .load(AlertsService::get_alerts(self.api.as_ref()), fallback::alerts)
            .await
    }

    pub fn snapshot(&self) -> ViewState<Vec<AlertView>> {
        self.model.snapshot()
    }

    pub fn unread(&self) -> usize {
        AlertsService::unread_count(&self.model.snapshot().data)
    }

    pub fn unmount(&self) {
        self.model.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::types::AlertRecord;
    use crate::test_support::{FakeApi, Scripted};

    #[tokio::test]
    async fn test_live_alerts() {
        let api = Arc::new(FakeApi::default());
        api.alerts.lock().push(Scripted::ok(vec![AlertRecord {
            id: 42,
            stock_code: Some("BIAT".to_string()),
            alert_type: "anomaly".to_string(),
            message: "Volume spike".to_string(),
            severity: Some("medium".to_string()),
            timestamp: "2025-02-08T10:30:00".to_string(),
            is_read: false,
        }]));
        let hook = AlertsHook::new(api);

        let state = hook.mount().await;
        assert!(!state.using_mock);
        assert_eq!(state.data[0].id, 42);
        assert_eq!(state.data[0].symbol.as_deref(), Some("BIAT"));
        assert_eq!(hook.unread(), 1);
    }

    #[tokio::test]
    async fn test_failure_uses_bundled_alerts() {
        let api = Arc::new(FakeApi::default());
        let hook = AlertsHook::new(api);

        let state = hook.mount().await;
        assert!(state.using_mock);
        assert_eq!(state.data, fallback::alerts());
        assert_eq!(state.error.as_deref(), Some("Internal error: no scripted reply"));
    }
}
