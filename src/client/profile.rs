//! `/api/profile` endpoints

use super::ApiClient;
use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

pub struct ProfileApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/profile`
    pub async fn get(&self) -> Result<Value> {
        self.client.get("/api/profile").await
    }

    /// `POST /api/profile/analyze` with any JSON-serializable payload
    pub async fn analyze<B: Serialize + ?Sized>(&self, data: &B) -> Result<Value> {
        self.client.post("/api/profile/analyze", data).await
    }
}
