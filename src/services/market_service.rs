//! Market Service
//!
//! Maps `/api/market/overview` to the index cards. The server reports one
//! index; TUNINDEX20 and the point change are scaled from it until the
//! backend exposes them.

use crate::client::types::MarketOverviewResponse;
use crate::client::DashboardApi;
use crate::error::Result;
use crate::models::{IndexSnapshot, MarketOverview};
use tracing::info;

pub struct MarketService;

impl MarketService {
    pub async fn get_overview(api: &dyn DashboardApi) -> Result<Option<MarketOverview>> {
        let response = api.market_overview().await?;
        info!(
            "MarketService::get_overview - {} {:.2} ({:+.2}%)",
            response.index_name, response.value, response.change_pct
        );
        Ok(Some(Self::to_overview(&response)))
    }

    pub fn to_overview(response: &MarketOverviewResponse) -> MarketOverview {
        let pct = response.change_pct;

        MarketOverview {
            tunindex: IndexSnapshot {
                value: response.value,
                change: pct * 10.0,
                change_percent: pct,
            },
            tunindex20: IndexSnapshot {
                value: response.value * 0.45,
                change: pct * 5.0,
                change_percent: pct * 0.95,
            },
            volume: 0,
            trades: 0,
            market_cap: 0,
            top_gainers: response.top_gainers.clone(),
            top_losers: response.top_losers.clone(),
        }
    }
}
