//! `/api/stocks` endpoints

use super::types::{
    AnomalyReport, Recommendation, StockHistory, StockListing, StockPrediction, StockSentiment,
};
use super::{segment, with_query, ApiClient};
use crate::error::Result;

pub const DEFAULT_HISTORY_DAYS: u32 = 30;

pub struct StocksApi<'a> {
    client: &'a ApiClient,
}

impl<'a> StocksApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    fn path(code: &str, suffix: &str) -> String {
        format!("/api/stocks/{}{}", segment(code), suffix)
    }

    /// `GET /api/stocks`
    pub async fn list(&self) -> Result<Vec<StockListing>> {
        self.client.get("/api/stocks").await
    }

    /// `GET /api/stocks/{code}`
    pub async fn detail(&self, code: &str) -> Result<StockListing> {
        self.client.get(&Self::path(code, "")).await
    }

    /// `GET /api/stocks/{code}/history?days=`
    pub async fn history(&self, code: &str, days: Option<u32>) -> Result<StockHistory> {
        let days = days.unwrap_or(DEFAULT_HISTORY_DAYS);
        let path = with_query(&Self::path(code, "/history"), &[("days", days.to_string())]);
        self.client.get(&path).await
    }

    /// `GET /api/stocks/{code}/prediction`
    pub async fn prediction(&self, code: &str) -> Result<StockPrediction> {
        self.client.get(&Self::path(code, "/prediction")).await
    }

    /// `GET /api/stocks/{code}/sentiment`
    pub async fn sentiment(&self, code: &str) -> Result<StockSentiment> {
        self.client.get(&Self::path(code, "/sentiment")).await
    }

    /// `GET /api/stocks/{code}/recommendation`
    pub async fn recommendation(&self, code: &str) -> Result<Recommendation> {
        self.client.get(&Self::path(code, "/recommendation")).await
    }

    /// `GET /api/stocks/{code}/anomaly`
    pub async fn anomaly(&self, code: &str) -> Result<AnomalyReport> {
        self.client.get(&Self::path(code, "/anomaly")).await
    }
}
