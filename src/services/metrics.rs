//! Portfolio performance metrics
//!
//! Holdings are treated as one return sample each: the per-holding gain is
//! the return, and the drawdown runs over the holdings in display order.

use crate::models::{Holding, PortfolioSummary};
use serde::Serialize;

/// Monthly risk-free rate (7% a year)
pub const RISK_FREE_RATE: f64 = 0.07 / 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioMetrics {
    pub roi: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
}

impl PortfolioMetrics {
    pub fn calculate(holdings: &[Holding], summary: &PortfolioSummary) -> Self {
        if holdings.is_empty() {
            return Self::default();
        }

        let returns: Vec<f64> = holdings.iter().map(|h| h.gain_percent / 100.0).collect();
        let n = returns.len() as f64;
        let mean = returns.iter().sum::<f64>() / n;
        let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
        let std_dev = variance.sqrt();

        let sharpe_ratio = if std_dev > 0.0 {
            (mean - RISK_FREE_RATE) / std_dev
        } else {
            0.0
        };

        let mut peak = f64::NEG_INFINITY;
        let mut max_drawdown = 0.0_f64;
        for r in &returns {
            let level = 1.0 + r;
            peak = peak.max(level);
            max_drawdown = max_drawdown.max((peak - level) / peak);
        }

        let roi = if summary.invested_value > 0.0 {
            (summary.total_value - summary.invested_value) / summary.invested_value * 100.0
        } else {
            0.0
        };

        Self {
            roi,
            sharpe_ratio,
            max_drawdown: max_drawdown * 100.0,
        }
    }

    pub fn sharpe_rating(&self) -> &'static str {
        if self.sharpe_ratio > 1.0 {
            "Excellent"
        } else if self.sharpe_ratio > 0.5 {
            "Good"
        } else {
            "Moderate"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback;

    fn holding(gain_percent: f64) -> Holding {
        Holding {
            symbol: "X".to_string(),
            name: "X".to_string(),
            shares: 1,
            avg_cost: 1.0,
            current_price: 1.0,
            value: 1.0,
            gain: 0.0,
            gain_percent,
        }
    }

    #[test]
    fn test_empty_holdings_are_zero() {
        let metrics = PortfolioMetrics::calculate(&[], &fallback::portfolio_summary());
        assert_eq!(metrics, PortfolioMetrics::default());
    }

    #[test]
    fn test_sharpe_uses_population_std_dev() {
        let summary = fallback::portfolio_summary();
        let metrics = PortfolioMetrics::calculate(&[holding(10.0), holding(20.0)], &summary);
        // mean 0.15, std dev 0.05
        let expected = (0.15 - RISK_FREE_RATE) / 0.05;
        assert!((metrics.sharpe_ratio - expected).abs() < 1e-9);
        assert_eq!(metrics.sharpe_rating(), "Excellent");
    }

    #[test]
    fn test_identical_returns_have_zero_sharpe() {
        let summary = fallback::portfolio_summary();
        let metrics = PortfolioMetrics::calculate(&[holding(5.0), holding(5.0)], &summary);
        assert_eq!(metrics.sharpe_ratio, 0.0);
        assert_eq!(metrics.max_drawdown, 0.0);
    }

    #[test]
    fn test_max_drawdown_from_running_peak() {
        let holdings = [holding(20.0), holding(-4.0), holding(8.0)];
        let metrics = PortfolioMetrics::calculate(&holdings, &fallback::portfolio_summary());
        // peak 1.2, trough 0.96
        assert!((metrics.max_drawdown - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_roi_of_bundled_portfolio() {
        let portfolio = fallback::portfolio();
        let metrics = PortfolioMetrics::calculate(&portfolio.holdings, &portfolio.summary);
        assert!((metrics.roi - 40437.5 / 245000.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_roi_without_investment() {
        let mut summary = fallback::portfolio_summary();
        summary.invested_value = 0.0;
        let metrics = PortfolioMetrics::calculate(&[holding(1.0)], &summary);
        assert_eq!(metrics.roi, 0.0);
    }
}
