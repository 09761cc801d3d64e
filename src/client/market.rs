//! `/api/market` endpoints

use super::types::{MarketOverviewResponse, MarketSentiment, TopMovers};
use super::{segment, with_query, ApiClient};
use crate::error::Result;
use serde_json::Value;

pub struct MarketApi<'a> {
    client: &'a ApiClient,
}

impl<'a> MarketApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/market/overview`
    pub async fn overview(&self) -> Result<MarketOverviewResponse> {
        self.client.get("/api/market/overview").await
    }

    /// `GET /api/market/top-movers`
    pub async fn top_movers(&self) -> Result<TopMovers> {
        self.client.get("/api/market/top-movers").await
    }

    /// `GET /api/market/sentiment`
    pub async fn sentiment(&self) -> Result<MarketSentiment> {
        self.client.get("/api/market/sentiment").await
    }

    /// `GET /api/market/live`
    ///
    /// Live feeds come from a third-party scraper and have no fixed shape.
    pub async fn live(&self) -> Result<Value> {
        self.client.get("/api/market/live").await
    }

    /// `GET /api/market/live/quote/{code}`
    pub async fn live_quote(&self, stock_code: &str) -> Result<Value> {
        self.client
            .get(&format!("/api/market/live/quote/{}", segment(stock_code)))
            .await
    }

    /// `GET /api/market/live/tunindex`
    pub async fn live_tunindex(&self) -> Result<Value> {
        self.client.get("/api/market/live/tunindex").await
    }

    /// `GET /api/market/live/movers?limit=`; the server defaults to 10
    pub async fn live_movers(&self, limit: Option<u32>) -> Result<Value> {
        let limit = limit.unwrap_or(10);
        self.client
            .get(&with_query("/api/market/live/movers", &[("limit", limit.to_string())]))
            .await
    }
}
