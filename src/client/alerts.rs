//! `/api/alerts` endpoints

use super::types::{AlertRecord, StatusResponse, UnreadCount};
use super::{ApiClient, RequestOptions};
use crate::error::Result;

pub struct AlertsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AlertsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/alerts`
    pub async fn list(&self) -> Result<Vec<AlertRecord>> {
        self.client.get("/api/alerts").await
    }

    /// `GET /api/alerts/unread`
    pub async fn unread(&self) -> Result<UnreadCount> {
        self.client.get("/api/alerts/unread").await
    }

    /// `POST /api/alerts/{id}/read` (no body)
    ///
    /// The server answers `{"status": "not_found"}` with a 200 for unknown ids.
    pub async fn mark_read(&self, alert_id: i64) -> Result<StatusResponse> {
        self.client
            .request_as(
                &format!("/api/alerts/{}/read", alert_id),
                RequestOptions::post(None),
            )
            .await
    }
}
