//! Dashboard API client
//!
//! [`ApiClient::request`] is the single place where HTTP happens. The
//! endpoint namespaces (`client.market()`, `client.stocks()`, ...) only
//! marshal arguments into paths, query strings and JSON bodies.

pub mod agent;
pub mod alerts;
pub mod cancel;
pub mod market;
pub mod news;
pub mod portfolio;
pub mod profile;
pub mod scheduler;
pub mod stocks;
pub mod types;

pub use cancel::{run_cancellable, CancelToken};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::Arc;
use tracing::{debug, info, warn};
use types::*;

/// Per-call options for [`ApiClient::request`]
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    /// Added after `Content-Type: application/json`; same-named headers replace it
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
    pub cancel: Option<CancelToken>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: Option<Value>) -> Self {
        Self {
            method: Method::POST,
            body,
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }
}

/// HTTP client for the dashboard API
///
/// Holds no mutable state; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    /// Build a client from explicit configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.normalized_base_url()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to create HTTP client: {}", e)))?;

        info!("Dashboard API client targeting {}", base_url);

        Ok(Self {
            client,
            base_url: Arc::from(base_url),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path
    pub fn url(&self, endpoint: &str) -> Result<String> {
        if !endpoint.starts_with('/') {
            return Err(ApiError::Validation(format!(
                "Endpoint must start with '/': {}",
                endpoint
            )));
        }
        Ok(format!("{}{}", self.base_url, endpoint))
    }

    /// Issue a request and return the parsed JSON body untouched
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Value> {
        let cancel = options.cancel.clone();
        run_cancellable(cancel.as_ref(), async {
            let response = self.dispatch(endpoint, options).await?;
            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            Ok(serde_json::from_slice(&bytes)?)
        })
        .await
    }

    /// Issue a request and decode the body into `T`
    pub async fn request_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let value = self.request(endpoint, options).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.request_as(endpoint, RequestOptions::get()).await
    }

    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.request_as(endpoint, RequestOptions::post(Some(body)))
            .await
    }

    /// Send a request and hand back the successful response unread
    ///
    /// Non-2xx statuses are converted to [`ApiError::Status`]. Used directly
    /// by streaming endpoints.
    pub(crate) async fn dispatch(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Response> {
        let url = self.url(endpoint)?;
        let headers = build_headers(&options.headers)?;
        let method = options.method;

        debug!("{} {}", method, url);

        let mut builder = self.client.request(method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        let response = builder.send().await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            ApiError::from(e)
        })?;

        if response.status().is_success() {
            return Ok(response);
        }

        let err = error_from_response(response).await;
        warn!("{} {} returned error: {}", method, url, err);
        Err(err)
    }

    // ========================================================================
    // Endpoint namespaces
    // ========================================================================

    /// `GET /health`
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get("/health").await
    }

    pub fn market(&self) -> market::MarketApi<'_> {
        market::MarketApi::new(self)
    }

    pub fn stocks(&self) -> stocks::StocksApi<'_> {
        stocks::StocksApi::new(self)
    }

    pub fn news(&self) -> news::NewsApi<'_> {
        news::NewsApi::new(self)
    }

    pub fn portfolio(&self) -> portfolio::PortfolioApi<'_> {
        portfolio::PortfolioApi::new(self)
    }

    pub fn alerts(&self) -> alerts::AlertsApi<'_> {
        alerts::AlertsApi::new(self)
    }

    pub fn agent(&self) -> agent::AgentApi<'_> {
        agent::AgentApi::new(self)
    }

    pub fn profile(&self) -> profile::ProfileApi<'_> {
        profile::ProfileApi::new(self)
    }

    pub fn scheduler(&self) -> scheduler::SchedulerApi<'_> {
        scheduler::SchedulerApi::new(self)
    }
}

fn build_headers(extra: &[(String, String)]) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    for (name, value) in extra {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| ApiError::Validation(format!("Invalid header name '{}': {}", name, e)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|e| ApiError::Validation(format!("Invalid header value: {}", e)))?;
        headers.insert(name, value);
    }

    Ok(headers)
}

async fn error_from_response(response: Response) -> ApiError {
    let status = response.status().as_u16();
    let message = match response.bytes().await {
        Ok(body) => detail_message(&body),
        Err(_) => None,
    };

    ApiError::Status {
        status,
        message: message.unwrap_or_else(|| format!("HTTP {}", status)),
    }
}

/// `detail` field of a JSON error body, if there is a usable one
fn detail_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Percent-encode a value used as a path segment
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Append `key=value` pairs to `path`; no `?` when `params` is empty
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", path, query)
}

// ============================================================================
// View-model data source
// ============================================================================

/// The calls the view-model hooks depend on
///
/// [`ApiClient`] is the production implementation; hooks only see this
/// trait so they can be driven by any source.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn list_stocks(&self) -> Result<Vec<StockListing>>;

    async fn market_overview(&self) -> Result<MarketOverviewResponse>;

    async fn portfolio_positions(&self) -> Result<Vec<PortfolioPosition>>;

    async fn stock_prediction(&self, code: &str) -> Result<StockPrediction>;

    async fn list_alerts(&self) -> Result<Vec<AlertRecord>>;
}

#[async_trait]
impl DashboardApi for ApiClient {
    async fn list_stocks(&self) -> Result<Vec<StockListing>> {
        self.stocks().list().await
    }

    async fn market_overview(&self) -> Result<MarketOverviewResponse> {
        self.market().overview().await
    }

    async fn portfolio_positions(&self) -> Result<Vec<PortfolioPosition>> {
        self.portfolio().list().await
    }

    async fn stock_prediction(&self, code: &str) -> Result<StockPrediction> {
        self.stocks().prediction(code).await
    }

    async fn list_alerts(&self) -> Result<Vec<AlertRecord>> {
        self.alerts().list().await
    }
}
