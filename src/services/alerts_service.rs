//! Alerts Service
//!
//! Maps `/api/alerts` rows to alerts panel entries.

use crate::client::types::AlertRecord;
use crate::client::DashboardApi;
use crate::error::Result;
use crate::models::AlertView;
use tracing::info;

pub struct AlertsService;

impl AlertsService {
    /// Live alerts, or `None` when there is none
    pub async fn get_alerts(api: &dyn DashboardApi) -> Result<Option<Vec<AlertView>>> {
        let records = api.list_alerts().await?;
        info!("AlertsService::get_alerts - {} alerts", records.len());

        if records.is_empty() {
            return Ok(None);
        }
        Ok(Some(records.iter().map(Self::to_view).collect()))
    }

    pub fn to_view(record: &AlertRecord) -> AlertView {
        AlertView {
            id: record.id,
            alert_type: record.alert_type.clone(),
            symbol: record.stock_code.clone(),
            message: record.message.clone(),
            severity: record.severity.clone(),
            timestamp: record.timestamp.clone(),
            read: record.is_read,
        }
    }

    pub fn unread_count(alerts: &[AlertView]) -> usize {
        alerts.iter().filter(|a| !a.read).count()
    }
}
