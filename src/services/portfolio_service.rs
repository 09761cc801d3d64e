//! Portfolio Service
//!
//! Maps `/api/portfolio` positions to holdings and rolls them up into the
//! summary card.

use crate::client::types::PortfolioPosition;
use crate::client::DashboardApi;
use crate::error::Result;
use crate::models::{Holding, Portfolio, PortfolioSummary};
use tracing::info;

/// Share of the total value shown as today's change until the backend
/// reports intraday performance
const TODAY_CHANGE_RATE: f64 = 0.01;
const TODAY_CHANGE_PERCENT: f64 = 1.0;

pub struct PortfolioService;

impl PortfolioService {
    /// Live portfolio, or `None` when the account holds no position
    pub async fn get_portfolio(api: &dyn DashboardApi) -> Result<Option<Portfolio>> {
        let positions = api.portfolio_positions().await?;
        info!("PortfolioService::get_portfolio - {} positions", positions.len());
        Ok(Self::build_portfolio(&positions))
    }

    pub fn build_portfolio(positions: &[PortfolioPosition]) -> Option<Portfolio> {
        if positions.is_empty() {
            return None;
        }

        let holdings: Vec<Holding> = positions.iter().map(Self::to_holding).collect();
        Some(Portfolio {
            summary: Self::summarize(&holdings),
            holdings,
        })
    }

    /// Without a live price the position is valued at cost
    pub fn to_holding(position: &PortfolioPosition) -> Holding {
        let shares = position.quantity;
        let avg_cost = position.avg_buy_price;
        let current_price = position.current_price.unwrap_or(avg_cost);
        let gain = (current_price - avg_cost) * shares as f64;

        Holding {
            symbol: position.stock_code.clone(),
            name: position.stock_code.clone(),
            shares,
            avg_cost,
            current_price,
            value: position
                .current_value
                .unwrap_or(current_price * shares as f64),
            gain,
            gain_percent: percent_of(current_price - avg_cost, avg_cost),
        }
    }

    pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
        let total_value: f64 = holdings.iter().map(|h| h.value).sum();
        let invested_value: f64 = holdings.iter().map(|h| h.shares as f64 * h.avg_cost).sum();
        let total_returns = total_value - invested_value;

        PortfolioSummary {
            total_value,
            invested_value,
            today_change: total_value * TODAY_CHANGE_RATE,
            today_change_percent: TODAY_CHANGE_PERCENT,
            total_returns,
            return_percent: percent_of(total_returns, invested_value),
        }
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}
