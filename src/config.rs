use gloo::utils::format::JsValueSerdeExt;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::domain::logging::LogLevel;
use crate::infrastructure::http::DEFAULT_CHART_ENDPOINT;

/// Options the host page may pass to `attachChartForm` / `mountChartForm`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartFormConfig {
    pub endpoint: String,
    pub date_input_id: String,
    pub time_input_id: String,
    pub image_id: String,
    pub log_level: LogLevel,
}

impl Default for ChartFormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_CHART_ENDPOINT.to_string(),
            date_input_id: "date".to_string(),
            time_input_id: "time".to_string(),
            image_id: "chart".to_string(),
            log_level: LogLevel::Debug,
        }
    }
}

impl ChartFormConfig {
    /// `undefined` and `null` mean all defaults
    pub fn from_js(value: &JsValue) -> Result<Self, JsValue> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        value
            .into_serde()
            .map_err(|e| JsValue::from_str(&format!("Invalid chart form config: {e}")))
    }
}
