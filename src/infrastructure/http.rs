use gloo_net::http::Request;
use serde::Deserialize;

use crate::application::ports::ChartBackend;
use crate::domain::{
    ChartFormError, ChartRequest, ChartResponse, ChartResult,
    logging::{LogComponent, get_logger},
};

pub const DEFAULT_CHART_ENDPOINT: &str = "/chart";

/// Error shape the chart backend answers with on a failed render
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    error: String,
}

/// HTTP client for the chart-rendering backend
#[derive(Debug, Clone)]
pub struct ChartHttpClient {
    endpoint: String,
}

impl Default for ChartHttpClient {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_ENDPOINT)
    }
}

impl ChartHttpClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// `POST <endpoint>` with the request as a JSON body
    pub async fn post_chart(&self, request: &ChartRequest) -> ChartResult<ChartResponse> {
        get_logger().debug(
            LogComponent::Infrastructure("ChartHttpClient"),
            &format!("📡 POST {}", self.endpoint),
        );

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .map_err(|e| ChartFormError::request_failure(format!("Failed to encode request: {e}")))?
            .send()
            .await
            .map_err(|e| ChartFormError::request_failure(e.to_string()))?;

        let body = if response.ok() {
            response
                .text()
                .await
                .map_err(|e| ChartFormError::request_failure(format!("Failed to read response: {e}")))?
        } else {
            response.text().await.unwrap_or_default()
        };
        let chart = decode_chart_body(response.status(), &response.status_text(), &body)?;

        get_logger().debug(
            LogComponent::Infrastructure("ChartHttpClient"),
            &format!("✅ Received chart ({} base64 chars)", chart.chart.len()),
        );

        Ok(chart)
    }
}

impl ChartBackend for ChartHttpClient {
    async fn fetch_chart(&self, request: &ChartRequest) -> ChartResult<ChartResponse> {
        self.post_chart(request).await
    }
}

/// Turn a response body into a chart, whatever the status
pub fn decode_chart_body(status: u16, status_text: &str, body: &str) -> ChartResult<ChartResponse> {
    if !(200..300).contains(&status) {
        return Err(failure_from_status(status, status_text, body));
    }
    serde_json::from_str(body)
        .map_err(|e| ChartFormError::request_failure(format!("Failed to parse JSON: {e}")))
}

/// Prefer the backend's own `{"error": ...}` message over the bare status
pub fn failure_from_status(status: u16, status_text: &str, body: &str) -> ChartFormError {
    match serde_json::from_str::<BackendErrorBody>(body) {
        Ok(parsed) => ChartFormError::RequestFailure(parsed.error),
        Err(_) => {
            let line = format!("HTTP error: {} {}", status, status_text);
            ChartFormError::RequestFailure(line.trim_end().to_string())
        }
    }
}
