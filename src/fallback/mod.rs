//! Bundled sample dataset
//!
//! Shown whenever the API is unreachable or returns nothing, so views always
//! have something to render. Every accessor returns the same value on every
//! call.

pub mod generators;

use crate::client::types::{DayForecast, PredictionAdvice, StockPrediction};
use crate::models::*;
use std::collections::BTreeMap;

// symbol, name, sector, price, change, change %, volume, market cap
#[rustfmt::skip]
const STOCK_ROWS: &[(&str, &str, &str, f64, f64, f64, i64, i64)] = &[
    ("BIAT", "Banque Internationale Arabe de Tunisie", "Banking", 118.50, 2.34, 2.01, 45230, 2_847_000_000),
    ("BNA", "Banque Nationale Agricole", "Banking", 12.80, -0.15, -1.16, 23100, 512_000_000),
    ("SFBT", "Société de Fabrication des Boissons de Tunisie", "Consumer", 21.40, 0.85, 4.13, 67800, 1_284_000_000),
    ("ATB", "Arab Tunisian Bank", "Banking", 4.25, 0.12, 2.91, 89450, 340_000_000),
    ("BH", "Banque de l'Habitat", "Banking", 15.60, -0.28, -1.76, 34200, 624_000_000),
    ("UIB", "Union Internationale de Banques", "Banking", 22.30, 1.05, 4.94, 52100, 892_000_000),
    ("STAR", "Société Tunisienne d'Assurances et de Réassurances", "Insurance", 156.00, 3.20, 2.09, 12400, 1_560_000_000),
    ("TJARI", "Tunisie Leasing & Factoring", "Financial Services", 8.90, 0.22, 2.53, 28700, 178_000_000),
    ("SOTUVER", "Société Tunisienne de Verreries", "Industrial", 7.15, -0.08, -1.11, 15600, 143_000_000),
    ("POULINA", "Poulina Group Holding", "Conglomerate", 13.25, 0.45, 3.51, 78900, 795_000_000),
    ("ADWYA", "Adwya", "Healthcare", 6.40, 0.18, 2.89, 41200, 192_000_000),
    ("SAH", "SAH Lilas", "Consumer", 18.70, -0.32, -1.68, 25800, 561_000_000),
];

// symbol, name, shares, avg cost, current price, value, gain, gain %
#[rustfmt::skip]
const HOLDING_ROWS: &[(&str, &str, i64, f64, f64, f64, f64, f64)] = &[
    ("BIAT", "Banque Internationale Arabe de Tunisie", 500, 105.20, 118.50, 59250.00, 6650.00, 12.64),
    ("SFBT", "SFBT", 1200, 18.50, 21.40, 25680.00, 3480.00, 15.68),
    ("STAR", "STAR Assurances", 200, 142.00, 156.00, 31200.00, 2800.00, 9.86),
    ("UIB", "Union Internationale de Banques", 800, 19.80, 22.30, 17840.00, 2000.00, 12.63),
    ("POULINA", "Poulina Group Holding", 2000, 11.50, 13.25, 26500.00, 3500.00, 15.22),
    ("ATB", "Arab Tunisian Bank", 5000, 3.90, 4.25, 21250.00, 1750.00, 8.97),
    ("BH", "Banque de l'Habitat", 1500, 16.20, 15.60, 23400.00, -900.00, -3.70),
    ("ADWYA", "Adwya", 3000, 5.80, 6.40, 19200.00, 1800.00, 10.34),
];

// id, type, symbol, message, timestamp, read
#[rustfmt::skip]
const ALERT_ROWS: &[(i64, &str, Option<&str>, &str, &str, bool)] = &[
    (1, "price_target", Some("BIAT"), "BIAT reached your target of 118.00 TND", "2025-02-08T10:30:00", false),
    (2, "volume_spike", Some("SFBT"), "Unusual volume detected on SFBT (+245%)", "2025-02-08T09:15:00", false),
    (3, "recommendation", Some("UIB"), "AI recommends: Strong Buy for UIB", "2025-02-07T16:45:00", true),
    (4, "portfolio", None, "Your portfolio is up 0.44% today", "2025-02-08T08:00:00", true),
    (5, "price_drop", Some("BH"), "BH dropped 1.76% - below your alert threshold", "2025-02-07T14:20:00", true),
];

const SECTOR_ROWS: &[(&str, f64, u32)] = &[
    ("Banking", 2.34, 6),
    ("Insurance", 1.87, 4),
    ("Consumer", 3.21, 5),
    ("Industrial", -0.54, 8),
    ("Healthcare", 1.45, 3),
    ("Financial Services", 0.92, 4),
];

/// Price used for predictions of codes outside the sample dataset
pub const DEFAULT_PREDICTION_PRICE: f64 = 10.0;

/// Days covered by a forecast
pub const FORECAST_DAYS: u32 = 5;

pub fn stocks() -> Vec<StockQuote> {
    STOCK_ROWS
        .iter()
        .map(|row| {
            let &(symbol, name, sector, price, change, change_percent, volume, market_cap) = row;
            StockQuote {
                symbol: symbol.to_string(),
                name: name.to_string(),
                sector: sector.to_string(),
                price,
                change,
                change_percent,
                volume,
                market_cap,
                last_date: None,
            }
        })
        .collect()
}

pub fn market_summary() -> MarketOverview {
    MarketOverview {
        tunindex: IndexSnapshot {
            value: 9245.67,
            change: 45.23,
            change_percent: 0.49,
        },
        tunindex20: IndexSnapshot {
            value: 4123.45,
            change: 18.76,
            change_percent: 0.46,
        },
        volume: 4_523_000,
        trades: 2847,
        market_cap: 28_470_000_000,
        top_gainers: None,
        top_losers: None,
    }
}

pub fn portfolio_summary() -> PortfolioSummary {
    PortfolioSummary {
        total_value: 285_437.50,
        invested_value: 245_000.00,
        today_change: 1245.30,
        today_change_percent: 0.44,
        total_returns: 40_437.50,
        return_percent: 16.51,
    }
}

pub fn holdings() -> Vec<Holding> {
    HOLDING_ROWS
        .iter()
        .map(|&(symbol, name, shares, avg_cost, current_price, value, gain, gain_percent)| Holding {
            symbol: symbol.to_string(),
            name: name.to_string(),
            shares,
            avg_cost,
            current_price,
            value,
            gain,
            gain_percent,
        })
        .collect()
}

pub fn portfolio() -> Portfolio {
    Portfolio {
        summary: portfolio_summary(),
        holdings: holdings(),
    }
}

pub fn watchlist() -> Vec<WatchlistEntry> {
    let entry = |symbol: &str, alert: Option<PriceAlert>| {
        let row = STOCK_ROWS.iter().find(|row| row.0 == symbol);
        row.map(|&(symbol, name, _, price, change, change_percent, _, _)| WatchlistEntry {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            alert,
        })
    };

    [
        entry("BNA", None),
        entry(
            "SAH",
            Some(PriceAlert {
                direction: AlertDirection::Below,
                target: 18.00,
            }),
        ),
        entry("SOTUVER", None),
        entry(
            "TJARI",
            Some(PriceAlert {
                direction: AlertDirection::Above,
                target: 9.50,
            }),
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn alerts() -> Vec<AlertView> {
    ALERT_ROWS
        .iter()
        .map(|&(id, alert_type, symbol, message, timestamp, read)| AlertView {
            id,
            alert_type: alert_type.to_string(),
            symbol: symbol.map(str::to_string),
            message: message.to_string(),
            severity: None,
            timestamp: timestamp.to_string(),
            read,
        })
        .collect()
}

pub fn sectors() -> Vec<SectorPerformance> {
    SECTOR_ROWS
        .iter()
        .map(|&(name, performance, stocks)| SectorPerformance {
            name: name.to_string(),
            performance,
            stocks,
        })
        .collect()
}

/// Flat HOLD forecast at the sample price of `code`
///
/// Dates are left out so the value does not depend on the clock.
pub fn prediction(code: &str) -> StockPrediction {
    let price = STOCK_ROWS
        .iter()
        .find(|row| row.0.eq_ignore_ascii_case(code))
        .map(|row| row.3)
        .unwrap_or(DEFAULT_PREDICTION_PRICE);

    let predictions: BTreeMap<String, DayForecast> = (1..=FORECAST_DAYS)
        .map(|day| {
            (
                format!("day_{}", day),
                DayForecast {
                    date: None,
                    predicted_price: price,
                    predicted_return_pct: 0.0,
                    direction: "UP".to_string(),
                    confidence: 0.3,
                },
            )
        })
        .collect();

    StockPrediction {
        stock: code.to_string(),
        current_price: price,
        timestamp: None,
        model: Some("fallback".to_string()),
        predictions,
        recommendation: PredictionAdvice {
            action: "HOLD".to_string(),
            confidence: 0.3,
            avg_5d_return_pct: Some(0.0),
            reasons: vec!["Sample data: live forecast unavailable".to_string()],
        },
    }
}
