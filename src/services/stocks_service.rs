//! Stocks Service
//!
//! Maps `/api/stocks` rows to market table quotes.

use crate::client::types::StockListing;
use crate::client::DashboardApi;
use crate::error::Result;
use crate::models::StockQuote;
use tracing::info;

/// Sector shown for live rows; the listing carries no sector
pub const LIVE_SECTOR: &str = "BVMT";

pub struct StocksService;

impl StocksService {
    /// Live quotes, or `None` when the server lists no stock
    pub async fn get_stocks(api: &dyn DashboardApi) -> Result<Option<Vec<StockQuote>>> {
        let listings = api.list_stocks().await?;
        info!("StocksService::get_stocks - {} rows", listings.len());

        if listings.is_empty() {
            return Ok(None);
        }
        Ok(Some(listings.iter().map(Self::to_quote).collect()))
    }

    /// Missing prices and changes count as zero
    pub fn to_quote(listing: &StockListing) -> StockQuote {
        let price = listing.latest_price.unwrap_or(0.0);
        let change_percent = listing.change_pct.unwrap_or(0.0);

        StockQuote {
            symbol: listing.code.clone(),
            name: listing.name.clone(),
            sector: LIVE_SECTOR.to_string(),
            price,
            change: price * change_percent / 100.0,
            change_percent,
            volume: 0,
            market_cap: 0,
            last_date: listing.last_date.clone(),
        }
    }
}
