//! Prediction Service

use crate::client::types::StockPrediction;
use crate::client::DashboardApi;
use crate::error::Result;
use tracing::info;

pub struct PredictionService;

impl PredictionService {
    pub async fn get_prediction(
        api: &dyn DashboardApi,
        code: &str,
    ) -> Result<Option<StockPrediction>> {
        let prediction = api.stock_prediction(code).await?;
        info!(
            "PredictionService::get_prediction - {} {} ({} days)",
            code,
            prediction.recommendation.action,
            prediction.predictions.len()
        );
        Ok(Some(prediction))
    }
}
