//! Services Layer
//!
//! Turns server payloads into the view models the dashboard renders.
//! Hooks call services; services call the API through [`DashboardApi`].
//!
//! # Architecture
//!
//! ```text
//! Views --> Hooks --> Services --> DashboardApi (ApiClient | test fake)
//!              \
//!               └──> fallback (when the service fails or returns nothing)
//! ```
//!
//! # Services
//!
//! - `StocksService` - Stock list as market table rows
//! - `MarketService` - Index overview
//! - `PortfolioService` - Positions as holdings and a summary
//! - `PredictionService` - Five-day forecast for one stock
//! - `AlertsService` - Notifications for the alerts panel
//! - `PortfolioMetrics` - Sharpe ratio, drawdown and ROI of holdings
//!
//! A service returns `Ok(None)` when the server answered with nothing to
//! show, so the caller can fall back the same way it does on errors.
//!
//! [`DashboardApi`]: crate::client::DashboardApi

pub mod alerts_service;
pub mod format;
pub mod market_service;
pub mod metrics;
pub mod portfolio_service;
pub mod prediction_service;
pub mod stocks_service;

pub use alerts_service::AlertsService;
pub use format::{format_currency, format_number, format_percent};
pub use market_service::MarketService;
pub use metrics::PortfolioMetrics;
pub use portfolio_service::PortfolioService;
pub use prediction_service::PredictionService;
pub use stocks_service::StocksService;
