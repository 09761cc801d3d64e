//! View models consumed by dashboard views
//!
//! Serialized in camelCase, the shape the views bind to.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Row of the market table and watchlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuote {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: i64,
    pub market_cap: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexSnapshot {
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub tunindex: IndexSnapshot,
    pub tunindex20: IndexSnapshot,
    pub volume: i64,
    pub trades: i64,
    pub market_cap: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_gainers: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_losers: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub invested_value: f64,
    pub today_change: f64,
    pub today_change_percent: f64,
    pub total_returns: f64,
    pub return_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    pub name: String,
    pub shares: i64,
    pub avg_cost: f64,
    pub current_price: f64,
    pub value: f64,
    pub gain: f64,
    pub gain_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub summary: PortfolioSummary,
    pub holdings: Vec<Holding>,
}

/// Notification shown in the alerts panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertView {
    pub id: i64,
    pub alert_type: String,
    pub symbol: Option<String>,
    pub message: String,
    pub severity: Option<String>,
    pub timestamp: String,
    pub read: bool,
}

impl AlertView {
    /// Server timestamps are naive ISO-8601, with or without fractional seconds
    pub fn parsed_timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertDirection {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    #[serde(rename = "type")]
    pub direction: AlertDirection,
    pub target: f64,
}

impl PriceAlert {
    pub fn is_triggered(&self, price: f64) -> bool {
        match self.direction {
            AlertDirection::Above => price >= self.target,
            AlertDirection::Below => price <= self.target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub alert: Option<PriceAlert>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorPerformance {
    pub name: String,
    pub performance: f64,
    pub stocks: u32,
}

/// Point of a line chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
    pub volume: u64,
}

/// Candle of a candlestick chart; `price` mirrors `close` for line charts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub price: f64,
    pub volume: u64,
}
