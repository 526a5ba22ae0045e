use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlImageElement, HtmlInputElement};

use crate::application::ports::ChartView;
use crate::config::ChartFormConfig;
use crate::domain::{
    ChartImage,
    logging::{LogComponent, get_logger},
};

/// Blocking notification through `window.alert`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNotifier;

impl BrowserNotifier {
    pub fn alert(&self, message: &str) {
        get_logger().debug(LogComponent::Infrastructure("Notifier"), &format!("🔔 alert: {message}"));
        gloo::dialogs::alert(message);
    }
}

/// Chart form bound to markup the host page already has
pub struct DomChartView {
    date_input: HtmlInputElement,
    time_input: HtmlInputElement,
    image: HtmlImageElement,
    notifier: BrowserNotifier,
}

impl DomChartView {
    /// Look up the date input, time input and image by the configured ids
    pub fn attach(config: &ChartFormConfig) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("Document not available"))?;

        Ok(Self {
            date_input: element_by_id(&document, &config.date_input_id)?,
            time_input: element_by_id(&document, &config.time_input_id)?,
            image: element_by_id(&document, &config.image_id)?,
            notifier: BrowserNotifier,
        })
    }

    pub fn image_source(&self) -> String {
        self.image.src()
    }
}

fn element_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element '{id}' not found in DOM")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element '{id}' has the wrong type")))
}

impl ChartView for DomChartView {
    fn date(&self) -> String {
        self.date_input.value()
    }

    fn set_date(&self, value: &str) {
        self.date_input.set_value(value);
    }

    fn time(&self) -> String {
        self.time_input.value()
    }

    fn set_time(&self, value: &str) {
        self.time_input.set_value(value);
    }

    fn set_chart_image(&self, image: &ChartImage) {
        self.image.set_src(&image.data_uri());
    }

    fn notify_error(&self, message: &str) {
        self.notifier.alert(message);
    }
}
