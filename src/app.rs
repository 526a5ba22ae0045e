use leptos::*;
use std::rc::Rc;

use crate::{
    application::{ChartFormController, ChartView, RequestStatus},
    config::ChartFormConfig,
    domain::{
        ChartImage,
        logging::{LogComponent, get_logger},
    },
    infrastructure::{BrowserClock, BrowserNotifier, ChartHttpClient},
};

/// Chart form state held in Leptos signals
#[derive(Clone, Copy)]
pub struct SignalChartView {
    pub date: RwSignal<String>,
    pub time: RwSignal<String>,
    pub image: RwSignal<Option<String>>,
    pub status: RwSignal<RequestStatus>,
    pub last_error: RwSignal<Option<String>>,
}

impl SignalChartView {
    pub fn new() -> Self {
        Self {
            date: create_rw_signal(String::new()),
            time: create_rw_signal(String::new()),
            image: create_rw_signal(None),
            status: create_rw_signal(RequestStatus::Idle),
            last_error: create_rw_signal(None),
        }
    }
}

impl Default for SignalChartView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartView for SignalChartView {
    fn date(&self) -> String {
        self.date.get_untracked()
    }

    fn set_date(&self, value: &str) {
        self.date.set(value.to_string());
    }

    fn time(&self) -> String {
        self.time.get_untracked()
    }

    fn set_time(&self, value: &str) {
        self.time.set(value.to_string());
    }

    fn set_chart_image(&self, image: &ChartImage) {
        self.last_error.set(None);
        self.image.set(Some(image.data_uri()));
    }

    fn notify_error(&self, message: &str) {
        self.last_error.set(Some(message.to_string()));
        BrowserNotifier.alert(message);
    }

    fn set_status(&self, status: RequestStatus) {
        self.status.set(status);
    }
}

type SignalController = ChartFormController<ChartHttpClient, SignalChartView, BrowserClock>;

fn spawn_request(controller: Rc<SignalController>) {
    spawn_local(async move {
        let _ = controller.request_chart().await;
    });
}

/// 🦀 Date/time form with the rendered chart below it
#[component]
pub fn App(config: ChartFormConfig) -> impl IntoView {
    let view = SignalChartView::new();
    let controller = Rc::new(ChartFormController::new(
        ChartHttpClient::new(config.endpoint.clone()),
        view,
        BrowserClock,
    ));

    {
        let controller = controller.clone();
        spawn_local(async move {
            let _ = controller.initialize().await;
        });
    }

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        get_logger().debug(LogComponent::Presentation("App"), "🖱️ Update requested");
        spawn_request(controller.clone());
    };

    view! {
        <style>
            {r#"
            .chart-form-app {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #0b0b12;
                min-height: 100vh;
                padding: 20px;
                color: white;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 16px;
            }

            .chart-form {
                display: flex;
                gap: 12px;
                align-items: center;
                background: rgba(255, 255, 255, 0.08);
                padding: 12px 20px;
                border-radius: 12px;
                border: 1px solid rgba(255, 255, 255, 0.2);
            }

            .chart-form button {
                background: #4a5d73;
                color: white;
                border: none;
                padding: 6px 14px;
                border-radius: 5px;
                cursor: pointer;
            }

            .status {
                color: #72c685;
                font-size: 14px;
            }

            .error {
                color: #ff6b6b;
                font-size: 14px;
            }

            .chart-image {
                max-width: 100%;
                border-radius: 10px;
            }
            "#}
        </style>
        <div class="chart-form-app">
            <form class="chart-form" on:submit=on_submit>
                <label>
                    "Date "
                    <input
                        type="date"
                        id=config.date_input_id
                        prop:value=move || view.date.get()
                        on:input=move |ev| view.date.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Time "
                    <input
                        type="time"
                        id=config.time_input_id
                        prop:value=move || view.time.get()
                        on:input=move |ev| view.time.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Update Chart"</button>
            </form>
            <div class="status">{move || format!("Chart: {}", view.status.get())}</div>
            <div class="error">{move || view.last_error.get().unwrap_or_default()}</div>
            <img id=config.image_id class="chart-image" alt="Chart" src=move || view.image.get() />
        </div>
    }
}

/// Mount [`App`] into `<body>`
pub fn mount(config: ChartFormConfig) {
    mount_to_body(move || view! { <App config=config /> });
}
