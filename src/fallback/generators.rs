//! Random series for demo charts
//!
//! Every generator takes the RNG from the caller; seed a `StdRng` for
//! reproducible output.

use crate::models::{Candle, PricePoint};
use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

const DEFAULT_DAYS: u32 = 30;
const DEFAULT_SPARKLINE_LEN: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    #[default]
    Up,
    Down,
    Flat,
}

impl Trend {
    fn bias(self) -> f64 {
        match self {
            Trend::Up => 0.1,
            Trend::Down => -0.1,
            Trend::Flat => 0.0,
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn volume<R: Rng + ?Sized>(rng: &mut R) -> u64 {
    rng.gen_range(10_000..110_000)
}

fn dates_until(end: NaiveDate, days: u32) -> impl Iterator<Item = NaiveDate> {
    (0..=days).rev().map(move |back| end - Duration::days(back as i64))
}

/// `days + 1` daily points ending today
pub fn price_history<R: Rng + ?Sized>(
    rng: &mut R,
    base_price: f64,
    days: Option<u32>,
) -> Vec<PricePoint> {
    let today = Local::now().date_naive();
    price_history_until(rng, base_price, days.unwrap_or(DEFAULT_DAYS), today)
}

/// `days + 1` daily points ending on `end`
///
/// Starts at 90% of `base_price` and never falls below 70% of it.
pub fn price_history_until<R: Rng + ?Sized>(
    rng: &mut R,
    base_price: f64,
    days: u32,
    end: NaiveDate,
) -> Vec<PricePoint> {
    let floor = base_price * 0.7;
    let mut price = base_price * 0.9;

    dates_until(end, days)
        .map(|date| {
            let change = (rng.gen::<f64>() - 0.45) * (base_price * 0.03);
            price = (price + change).max(floor);
            PricePoint {
                date: date.format("%Y-%m-%d").to_string(),
                price: round2(price),
                volume: volume(rng),
            }
        })
        .collect()
}

/// Random walk starting at 50, clamped to [10, 90]
pub fn sparkline<R: Rng + ?Sized>(rng: &mut R, length: Option<usize>, trend: Trend) -> Vec<f64> {
    let mut value = 50.0_f64;
    (0..length.unwrap_or(DEFAULT_SPARKLINE_LEN))
        .map(|_| {
            let change = (rng.gen::<f64>() - 0.5 + trend.bias()) * 10.0;
            value = (value + change).clamp(10.0, 90.0);
            value
        })
        .collect()
}

/// `days + 1` daily candles ending today
pub fn ohlc<R: Rng + ?Sized>(rng: &mut R, base_price: f64, days: Option<u32>) -> Vec<Candle> {
    let today = Local::now().date_naive();
    ohlc_until(rng, base_price, days.unwrap_or(DEFAULT_DAYS), today)
}

/// `days + 1` daily candles ending on `end`
pub fn ohlc_until<R: Rng + ?Sized>(
    rng: &mut R,
    base_price: f64,
    days: u32,
    end: NaiveDate,
) -> Vec<Candle> {
    let volatility = base_price * 0.025;
    let mut last_close = base_price * 0.9;

    dates_until(end, days)
        .map(|date| {
            let daily_change = (rng.gen::<f64>() - 0.45) * volatility;
            let open = last_close + (rng.gen::<f64>() - 0.5) * volatility * 0.3;
            let close = last_close + daily_change;
            let high = open.max(close) + rng.gen::<f64>() * volatility * 0.5;
            let low = open.min(close) - rng.gen::<f64>() * volatility * 0.5;
            last_close = close;

            Candle {
                date: date.format("%Y-%m-%d").to_string(),
                open: round2(open),
                high: round2(high),
                low: round2(low),
                close: round2(close),
                price: round2(close),
                volume: volume(rng),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn end() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 8).unwrap()
    }

    #[test]
    fn test_price_history_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let history = price_history_until(&mut rng, 118.5, 30, end());

        assert_eq!(history.len(), 31);
        assert_eq!(history.first().unwrap().date, "2025-01-09");
        assert_eq!(history.last().unwrap().date, "2025-02-08");
        for point in &history {
            assert!(point.price >= round2(118.5 * 0.7));
            assert!((10_000..110_000).contains(&point.volume));
            assert_eq!(point.price, round2(point.price));
        }
    }

    #[test]
    fn test_price_history_defaults_to_thirty_days() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(price_history(&mut rng, 10.0, None).len(), 31);
        assert_eq!(price_history(&mut rng, 10.0, Some(0)).len(), 1);
    }

    #[test]
    fn test_same_seed_same_series() {
        let a = price_history_until(&mut StdRng::seed_from_u64(42), 21.4, 10, end());
        let b = price_history_until(&mut StdRng::seed_from_u64(42), 21.4, 10, end());
        assert_eq!(a, b);
    }

    #[test]
    fn test_sparkline_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for trend in [Trend::Up, Trend::Down, Trend::Flat] {
            let line = sparkline(&mut rng, Some(500), trend);
            assert_eq!(line.len(), 500);
            assert!(line.iter().all(|v| (10.0..=90.0).contains(v)));
        }
        assert_eq!(sparkline(&mut rng, None, Trend::default()).len(), 20);
    }

    #[test]
    fn test_ohlc_candles_are_consistent() {
        let mut rng = StdRng::seed_from_u64(11);
        let candles = ohlc_until(&mut rng, 156.0, 60, end());

        assert_eq!(candles.len(), 61);
        for candle in &candles {
            assert!(candle.high >= candle.open.max(candle.close));
            assert!(candle.low <= candle.open.min(candle.close));
            assert_eq!(candle.price, candle.close);
        }
    }
}
