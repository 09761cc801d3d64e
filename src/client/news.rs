//! `/api/news` endpoints

use super::types::{MarketNewsSentiment, NewsItem, NewsQuery, StockNewsSentiment, TextSentiment};
use super::{segment, with_query, ApiClient};
use crate::error::Result;

pub const DEFAULT_STOCK_NEWS_LIMIT: u32 = 10;
pub const DEFAULT_SENTIMENT_DAYS: u32 = 7;

pub struct NewsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> NewsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/news?limit=&stock_code=&source=&language=&days=`
    pub async fn list(&self, query: &NewsQuery) -> Result<Vec<NewsItem>> {
        self.client.get(&list_path(query)).await
    }

    /// `GET /api/news/stock/{code}?limit=`
    pub async fn for_stock(&self, stock_code: &str, limit: Option<u32>) -> Result<Vec<NewsItem>> {
        let limit = limit.unwrap_or(DEFAULT_STOCK_NEWS_LIMIT);
        let path = with_query(
            &format!("/api/news/stock/{}", segment(stock_code)),
            &[("limit", limit.to_string())],
        );
        self.client.get(&path).await
    }

    /// `GET /api/news/sentiment/{code}?days=`
    pub async fn stock_sentiment(
        &self,
        stock_code: &str,
        days: Option<u32>,
    ) -> Result<StockNewsSentiment> {
        let days = days.unwrap_or(DEFAULT_SENTIMENT_DAYS);
        let path = with_query(
            &format!("/api/news/sentiment/{}", segment(stock_code)),
            &[("days", days.to_string())],
        );
        self.client.get(&path).await
    }

    /// `GET /api/news/market-sentiment?days=`
    pub async fn market_sentiment(&self, days: Option<u32>) -> Result<MarketNewsSentiment> {
        let days = days.unwrap_or(DEFAULT_SENTIMENT_DAYS);
        let path = with_query("/api/news/market-sentiment", &[("days", days.to_string())]);
        self.client.get(&path).await
    }

    /// `GET /api/news/analyze?text=`
    pub async fn analyze_text(&self, text: &str) -> Result<TextSentiment> {
        let path = with_query("/api/news/analyze", &[("text", text.to_string())]);
        self.client.get(&path).await
    }
}

/// Only filters that are set (and non-zero for numbers) make it into the query
fn list_path(query: &NewsQuery) -> String {
    let mut params: Vec<(&str, String)> = Vec::new();

    if let Some(limit) = query.limit.filter(|l| *l > 0) {
        params.push(("limit", limit.to_string()));
    }
    if let Some(code) = query.stock_code.as_deref().filter(|c| !c.is_empty()) {
        params.push(("stock_code", code.to_string()));
    }
    if let Some(source) = query.source.as_deref().filter(|s| !s.is_empty()) {
        params.push(("source", source.to_string()));
    }
    if let Some(language) = query.language.as_deref().filter(|l| !l.is_empty()) {
        params.push(("language", language.to_string()));
    }
    if let Some(days) = query.days.filter(|d| *d > 0) {
        params.push(("days", days.to_string()));
    }

    with_query("/api/news", &params)
}
