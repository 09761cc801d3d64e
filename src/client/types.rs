//! Server response and request schemas
//!
//! Every endpoint decodes into one of these shapes. Unknown fields are
//! ignored; fields the server may omit or send as `null` are `Option` or
//! carry a serde default, so a partial payload still validates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub service: Option<String>,
}

// ============================================================================
// Stocks
// ============================================================================

/// Row of `GET /api/stocks` and body of `GET /api/stocks/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockListing {
    pub code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub groupe: Option<i64>,
    #[serde(default)]
    pub latest_price: Option<f64>,
    #[serde(default)]
    pub change_pct: Option<f64>,
    #[serde(default)]
    pub last_date: Option<String>,
}

/// Daily bar in a stock history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(default)]
    pub volume: i64,
    #[serde(default)]
    pub transactions: Option<i64>,
    #[serde(default)]
    pub capital: Option<f64>,
}

/// `GET /api/stocks/{code}/history`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockHistory {
    pub stock_code: String,
    #[serde(default)]
    pub points: Vec<PriceBar>,
}

/// One horizon of a price forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    #[serde(default)]
    pub date: Option<String>,
    pub predicted_price: f64,
    #[serde(default)]
    pub predicted_return_pct: f64,
    #[serde(default)]
    pub direction: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionAdvice {
    pub action: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub avg_5d_return_pct: Option<f64>,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// `GET /api/stocks/{code}/prediction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockPrediction {
    pub stock: String,
    pub current_price: f64,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Keyed `day_1` .. `day_5`
    #[serde(default)]
    pub predictions: BTreeMap<String, DayForecast>,
    pub recommendation: PredictionAdvice,
}

/// `GET /api/stocks/{code}/sentiment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockSentiment {
    pub stock: String,
    #[serde(default)]
    pub date: Option<String>,
    pub score: f64,
    pub label: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub article_count: u32,
    #[serde(default)]
    pub articles: Vec<serde_json::Value>,
}

/// `GET /api/stocks/{code}/recommendation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub action: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub reasons: Vec<String>,
}

/// `GET /api/stocks/{code}/anomaly`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyReport {
    pub stock: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    pub is_anomaly: bool,
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub severity_score: f64,
    #[serde(default)]
    pub alerts: Vec<serde_json::Value>,
    #[serde(default)]
    pub features: serde_json::Value,
}

// ============================================================================
// Market
// ============================================================================

/// `GET /api/market/overview`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketOverviewResponse {
    #[serde(default = "default_index_name")]
    pub index_name: String,
    pub value: f64,
    pub change_pct: f64,
    #[serde(default)]
    pub top_gainers: Option<Vec<String>>,
    #[serde(default)]
    pub top_losers: Option<Vec<String>>,
}

fn default_index_name() -> String {
    "TUNINDEX".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub code: String,
    #[serde(default)]
    pub close: f64,
    #[serde(default)]
    pub change_pct: f64,
}

/// `GET /api/market/top-movers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopMovers {
    #[serde(default)]
    pub gainers: Vec<Mover>,
    #[serde(default)]
    pub losers: Vec<Mover>,
}

/// `GET /api/market/sentiment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSentiment {
    #[serde(default)]
    pub date: Option<String>,
    pub score: f64,
    pub label: String,
    #[serde(default)]
    pub confidence: f64,
}

// ============================================================================
// News
// ============================================================================

/// Article of `GET /api/news` and `GET /api/news/stock/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    pub source: String,
    #[serde(default)]
    pub stock_code: Option<String>,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub sentiment_score: Option<f64>,
    #[serde(default)]
    pub sentiment_label: Option<String>,
    #[serde(default)]
    pub sentiment_confidence: Option<f64>,
}

/// Filters for `GET /api/news`; unset fields are left out of the query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsQuery {
    pub limit: Option<u32>,
    pub stock_code: Option<String>,
    pub source: Option<String>,
    pub language: Option<String>,
    pub days: Option<u32>,
}

/// `GET /api/news/sentiment/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockNewsSentiment {
    pub stock_code: String,
    pub period_days: u32,
    pub article_count: u32,
    pub average_score: f64,
    pub sentiment_label: String,
    #[serde(default)]
    pub confidence: f64,
}

/// `GET /api/news/market-sentiment`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketNewsSentiment {
    pub period_days: u32,
    pub article_count: u32,
    pub average_score: f64,
    pub sentiment_label: String,
    #[serde(default)]
    pub stocks_covered: u32,
}

/// `GET /api/news/analyze`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSentiment {
    pub score: f64,
    pub label: String,
    pub confidence: f64,
}

// ============================================================================
// Portfolio
// ============================================================================

/// Row of `GET /api/portfolio`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPosition {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub user_id: Option<String>,
    pub stock_code: String,
    pub quantity: i64,
    pub avg_buy_price: f64,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub current_value: Option<f64>,
}

/// Body of `POST /api/portfolio/buy` and `POST /api/portfolio/sell`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub stock_code: String,
    pub quantity: i64,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResponse {
    pub status: String,
    #[serde(default)]
    pub position_id: Option<i64>,
}

// ============================================================================
// Alerts
// ============================================================================

/// Row of `GET /api/alerts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: i64,
    #[serde(default)]
    pub stock_code: Option<String>,
    pub alert_type: String,
    pub message: String,
    #[serde(default)]
    pub severity: Option<String>,
    pub timestamp: String,
    #[serde(default)]
    pub is_read: bool,
}

/// `GET /api/alerts/unread`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnreadCount {
    pub unread: u64,
}

/// Generic `{"status": ...}` acknowledgement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

// ============================================================================
// Agent
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// Body of `POST /api/agent/chat`
///
/// `stock_code` is always serialized, as `null` when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub stock_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<ChatMessage>>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stock_code: None,
            history: None,
        }
    }

    pub fn for_stock(mut self, stock_code: impl Into<String>) -> Self {
        self.stock_code = Some(stock_code.into());
        self
    }

    pub fn with_history(mut self, history: Vec<ChatMessage>) -> Self {
        self.history = Some(history);
        self
    }
}
