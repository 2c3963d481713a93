use gloo_net::http::Request;
use serde_json::Value;

use super::parse_history_payload;
use crate::domain::{
    errors::{AppError, NetworkResult},
    logging::LogComponent,
    market_data::{CandleSource, HistoryPayload},
};

/// GETs the candle aggregation endpoint; no query parameters.
#[derive(Debug, Clone)]
pub struct HistoryHttpClient {
    url: String,
}

impl HistoryHttpClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn fetch_body(&self) -> NetworkResult<Value> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Failed to send request: {e:?}")))?;

        if !response.ok() {
            return Err(AppError::NetworkError(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| AppError::ParseError(format!("Failed to parse JSON: {e:?}")))
    }
}

impl CandleSource for HistoryHttpClient {
    async fn fetch_history(&self) -> Result<HistoryPayload, AppError> {
        crate::log_debug!(LogComponent::Infrastructure("HistoryHttpClient"), "📡 Fetching candles from {}", self.url);
        let payload = parse_history_payload(self.fetch_body().await?)?;
        if let HistoryPayload::Candles(candles) = &payload {
            crate::log_debug!(
                LogComponent::Infrastructure("HistoryHttpClient"),
                "✅ Received {} candles",
                candles.len()
            );
        }
        Ok(payload)
    }
}
