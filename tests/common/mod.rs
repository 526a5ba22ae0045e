#![allow(dead_code)]

use chart_form_wasm::application::{ChartBackend, ChartFormController, ChartView, RequestStatus};
use chart_form_wasm::domain::{
    ChartFormError, ChartImage, ChartRequest, ChartResponse, ChartResult, Clock, LocalMoment,
};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;

/// In-memory form with a record of everything shown to the user
#[derive(Default)]
pub struct FakeView {
    pub date: RefCell<String>,
    pub time: RefCell<String>,
    pub image: RefCell<Option<String>>,
    pub notifications: RefCell<Vec<String>>,
    pub statuses: RefCell<Vec<RequestStatus>>,
}

impl FakeView {
    pub fn with_input(date: &str, time: &str) -> Self {
        let view = Self::default();
        view.set_date(date);
        view.set_time(time);
        view
    }

    pub fn last_status(&self) -> Option<RequestStatus> {
        self.statuses.borrow().last().copied()
    }
}

impl ChartView for FakeView {
    fn date(&self) -> String {
        self.date.borrow().clone()
    }

    fn set_date(&self, value: &str) {
        *self.date.borrow_mut() = value.to_string();
    }

    fn time(&self) -> String {
        self.time.borrow().clone()
    }

    fn set_time(&self, value: &str) {
        *self.time.borrow_mut() = value.to_string();
    }

    fn set_chart_image(&self, image: &ChartImage) {
        *self.image.borrow_mut() = Some(image.data_uri());
    }

    fn notify_error(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }

    fn set_status(&self, status: RequestStatus) {
        self.statuses.borrow_mut().push(status);
    }
}

/// Backend answering from a queue of prepared results
#[derive(Default)]
pub struct ScriptedBackend {
    pub responses: RefCell<VecDeque<ChartResult<ChartResponse>>>,
    pub requests: RefCell<Vec<ChartRequest>>,
}

impl ScriptedBackend {
    pub fn answering(responses: Vec<ChartResult<ChartResponse>>) -> Self {
        Self { responses: RefCell::new(responses.into()), requests: RefCell::new(Vec::new()) }
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl ChartBackend for ScriptedBackend {
    async fn fetch_chart(&self, request: &ChartRequest) -> ChartResult<ChartResponse> {
        self.requests.borrow_mut().push(*request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ChartFormError::request_failure("no scripted response")))
    }
}

/// Backend whose responses are released by the test through oneshot senders
#[derive(Default)]
pub struct PendingBackend {
    pub pending: RefCell<VecDeque<oneshot::Receiver<ChartResult<ChartResponse>>>>,
    pub requests: RefCell<Vec<ChartRequest>>,
}

impl PendingBackend {
    pub fn expect_request(&self) -> oneshot::Sender<ChartResult<ChartResponse>> {
        let (tx, rx) = oneshot::channel();
        self.pending.borrow_mut().push_back(rx);
        tx
    }
}

impl ChartBackend for PendingBackend {
    async fn fetch_chart(&self, request: &ChartRequest) -> ChartResult<ChartResponse> {
        self.requests.borrow_mut().push(*request);
        let rx = self.pending.borrow_mut().pop_front();
        match rx {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(ChartFormError::request_failure("canceled"))),
            None => Err(ChartFormError::request_failure("unexpected request")),
        }
    }
}

/// Clock that always reports the same moment
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub LocalMoment);

impl Clock for FixedClock {
    fn now(&self) -> LocalMoment {
        self.0
    }
}

pub fn chart(payload: &str) -> ChartResult<ChartResponse> {
    Ok(ChartResponse { chart: payload.to_string() })
}

pub fn march_7th() -> FixedClock {
    FixedClock(LocalMoment::new(2024, 3, 7, 14, 30))
}

pub fn controller<B: ChartBackend>(
    backend: B,
    view: FakeView,
) -> ChartFormController<B, FakeView, FixedClock> {
    ChartFormController::new(backend, view, march_7th())
}
