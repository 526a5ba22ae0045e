use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::application::ChartFormController;
use crate::config::ChartFormConfig;
use crate::domain::logging::{LogComponent, get_logger, init_logger};
use crate::infrastructure::{BrowserClock, ChartHttpClient, ConsoleLogger, DomChartView};

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

type DomController = ChartFormController<ChartHttpClient, DomChartView, BrowserClock>;

thread_local! {
    static ATTACHED_FORM: RefCell<Option<Rc<DomController>>> = const { RefCell::new(None) };
}

/// Module start: readable panics in the console
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
}

fn init_console_logger(config: &ChartFormConfig) {
    init_logger(Box::new(ConsoleLogger::new(config.log_level)));
}

/// Bind to the host's `date`/`time` inputs and `chart` image, fill in the
/// current moment and fetch the first chart.
#[wasm_bindgen(js_name = attachChartForm)]
pub fn attach_chart_form(config: JsValue) -> Result<(), JsValue> {
    let config = ChartFormConfig::from_js(&config)?;
    init_console_logger(&config);

    let view = DomChartView::attach(&config)?;
    let controller = Rc::new(ChartFormController::new(
        ChartHttpClient::new(config.endpoint.clone()),
        view,
        BrowserClock,
    ));
    ATTACHED_FORM.with(|slot| *slot.borrow_mut() = Some(controller.clone()));

    get_logger().info(
        LogComponent::Presentation("Initialize"),
        &format!("🚀 Chart form attached, endpoint {}", config.endpoint),
    );

    spawn_local(async move {
        let _ = controller.initialize().await;
    });
    Ok(())
}

/// Fetch a chart for the values currently in the attached form
#[wasm_bindgen(js_name = updateChart)]
pub fn update_chart() -> Result<(), JsValue> {
    let controller = ATTACHED_FORM
        .with(|slot| slot.borrow().clone())
        .ok_or_else(|| JsValue::from_str("Chart form is not attached; call attachChartForm first"))?;

    spawn_local(async move {
        let _ = controller.request_chart().await;
    });
    Ok(())
}

/// Render the Leptos form into `<body>`
#[wasm_bindgen(js_name = mountChartForm)]
pub fn mount_chart_form(config: JsValue) -> Result<(), JsValue> {
    let config = ChartFormConfig::from_js(&config)?;
    init_console_logger(&config);

    get_logger().info(LogComponent::Presentation("Initialize"), "🚀 Mounting chart form");
    app::mount(config);
    Ok(())
}
