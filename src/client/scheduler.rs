//! `/api/scheduler` endpoints

use super::ApiClient;
use crate::error::Result;
use serde_json::Value;

pub struct SchedulerApi<'a> {
    client: &'a ApiClient,
}

impl<'a> SchedulerApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/scheduler/status`
    pub async fn status(&self) -> Result<Value> {
        self.client.get("/api/scheduler/status").await
    }
}
