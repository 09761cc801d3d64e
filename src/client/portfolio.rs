//! `/api/portfolio` endpoints

use super::types::{PortfolioPosition, TradeRequest, TradeResponse};
use super::ApiClient;
use crate::error::Result;
use tracing::info;

pub struct PortfolioApi<'a> {
    client: &'a ApiClient,
}

impl<'a> PortfolioApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// `GET /api/portfolio`
    pub async fn list(&self) -> Result<Vec<PortfolioPosition>> {
        self.client.get("/api/portfolio").await
    }

    /// `POST /api/portfolio/buy`
    pub async fn buy(&self, stock_code: &str, quantity: i64, price: f64) -> Result<TradeResponse> {
        let trade = trade_request(stock_code, quantity, price);
        info!("Buying {} x {} @ {}", trade.quantity, trade.stock_code, trade.price);
        self.client.post("/api/portfolio/buy", &trade).await
    }

    /// `POST /api/portfolio/sell`
    pub async fn sell(&self, stock_code: &str, quantity: i64, price: f64) -> Result<TradeResponse> {
        let trade = trade_request(stock_code, quantity, price);
        info!("Selling {} x {} @ {}", trade.quantity, trade.stock_code, trade.price);
        self.client.post("/api/portfolio/sell", &trade).await
    }
}

fn trade_request(stock_code: &str, quantity: i64, price: f64) -> TradeRequest {
    TradeRequest {
        stock_code: stock_code.to_string(),
        quantity,
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::test_support::spawn_server;
    use axum::{
        http::{Method, StatusCode},
        routing::post,
        Json, Router,
    };
    use parking_lot::Mutex;
    use serde_json::{json, Value};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_buy_posts_exact_body() {
        let seen: Arc<Mutex<Vec<(Method, Value)>>> = Arc::new(Mutex::new(Vec::new()));
        let recorder = seen.clone();
        let router = Router::new().route(
            "/api/portfolio/buy",
            post(move |method: Method, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                async move {
                    recorder.lock().push((method, body));
                    Json(json!({"status": "ok", "position_id": 42}))
                }
            }),
        );
        let base = spawn_server(router).await;
        let client = ApiClient::new(&ClientConfig::new(base)).unwrap();

        let response = client.portfolio().buy("SFBT", 10, 21.4).await.unwrap();
        assert_eq!(response.status, "ok");
        assert_eq!(response.position_id, Some(42));

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, Method::POST);
        assert_eq!(seen[0].1, json!({"stock_code": "SFBT", "quantity": 10, "price": 21.4}));
    }

    #[tokio::test]
    async fn test_rejected_sell_surfaces_server_detail() {
        let router = Router::new().route(
            "/api/portfolio/sell",
            post(|Json(body): Json<Value>| async move {
                assert_eq!(body["quantity"], -1);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({"detail": "quantity must be greater than 0"})),
                )
            }),
        );
        let base = spawn_server(router).await;
        let client = ApiClient::new(&ClientConfig::new(base)).unwrap();

        let err = client.portfolio().sell("SFBT", -1, 21.4).await.unwrap_err();
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.to_string(), "quantity must be greater than 0");
    }
}
