//! Test helpers: in-process API server and fake data sources

use crate::client::types::*;
use crate::client::DashboardApi;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use axum::Router;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral local port and return its base URL
pub async fn spawn_server(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a local port with nothing listening on it
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

/// Scripted reply of [`FakeApi`]: a result released after `delay`
#[derive(Clone)]
pub struct Scripted<T> {
    pub delay: Duration,
    pub result: std::result::Result<T, String>,
}

impl<T> Scripted<T> {
    pub fn ok(value: T) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Ok(value),
        }
    }

    pub fn err(message: &str) -> Self {
        Self {
            delay: Duration::ZERO,
            result: Err(message.to_string()),
        }
    }

    pub fn after(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn play(self) -> Result<T> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.map_err(|message| ApiError::Status {
            status: 500,
            message,
        })
    }
}

/// In-memory [`DashboardApi`] with queued replies per call
///
/// Each call pops the next queued reply; when a queue is empty the call
/// fails with "no scripted reply".
#[derive(Default)]
pub struct FakeApi {
    pub stocks: Mutex<Vec<Scripted<Vec<StockListing>>>>,
    pub overview: Mutex<Vec<Scripted<MarketOverviewResponse>>>,
    pub positions: Mutex<Vec<Scripted<Vec<PortfolioPosition>>>>,
    pub predictions: Mutex<HashMap<String, Vec<Scripted<StockPrediction>>>>,
    pub alerts: Mutex<Vec<Scripted<Vec<AlertRecord>>>>,
}

fn next<T>(queue: &Mutex<Vec<Scripted<T>>>) -> Option<Scripted<T>> {
    let mut queue = queue.lock();
    if queue.is_empty() {
        None
    } else {
        Some(queue.remove(0))
    }
}

fn unscripted<T>() -> Result<T> {
    Err(ApiError::Internal("no scripted reply".to_string()))
}

#[async_trait]
impl DashboardApi for FakeApi {
    async fn list_stocks(&self) -> Result<Vec<StockListing>> {
        match next(&self.stocks) {
            Some(reply) => reply.play().await,
            None => unscripted(),
        }
    }

    async fn market_overview(&self) -> Result<MarketOverviewResponse> {
        match next(&self.overview) {
            Some(reply) => reply.play().await,
            None => unscripted(),
        }
    }

    async fn portfolio_positions(&self) -> Result<Vec<PortfolioPosition>> {
        match next(&self.positions) {
            Some(reply) => reply.play().await,
            None => unscripted(),
        }
    }

    async fn stock_prediction(&self, code: &str) -> Result<StockPrediction> {
        let reply = {
            let mut map = self.predictions.lock();
            map.get_mut(code)
                .filter(|queue| !queue.is_empty())
                .map(|queue| queue.remove(0))
        };
        match reply {
            Some(reply) => reply.play().await,
            None => unscripted(),
        }
    }

    async fn list_alerts(&self) -> Result<Vec<AlertRecord>> {
        match next(&self.alerts) {
            Some(reply) => reply.play().await,
            None => unscripted(),
        }
    }
}

pub fn listing(code: &str, latest_price: Option<f64>, change_pct: Option<f64>) -> StockListing {
    StockListing {
        code: code.to_string(),
        name: code.to_string(),
        groupe: Some(11),
        latest_price,
        change_pct,
        last_date: None,
    }
}

pub fn position(code: &str, quantity: i64, avg: f64, current: Option<f64>) -> PortfolioPosition {
    PortfolioPosition {
        id: None,
        user_id: None,
        stock_code: code.to_string(),
        quantity,
        avg_buy_price: avg,
        created_at: None,
        current_price: current,
        current_value: current.map(|p| p * quantity as f64),
    }
}
