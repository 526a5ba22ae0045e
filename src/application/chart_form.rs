use std::cell::Cell;

use crate::application::ports::{ChartBackend, ChartView, RequestStatus};
use crate::domain::{
    ChartFormError, ChartImage, ChartRequest, ChartResult, Clock, FormInput,
    logging::{LogComponent, get_logger},
};

const COMPONENT: LogComponent = LogComponent::Application("ChartForm");

/// Fills the date/time form and turns its values into a rendered chart.
///
/// Overlapping `request_chart` calls are neither cancelled nor queued: each
/// one writes the image when its own response arrives, so the response that
/// resolves last is the one left on screen.
pub struct ChartFormController<B, V, C> {
    backend: B,
    view: V,
    clock: C,
    in_flight: Cell<usize>,
}

impl<B, V, C> ChartFormController<B, V, C>
where
    B: ChartBackend,
    V: ChartView,
    C: Clock,
{
    pub fn new(backend: B, view: V, clock: C) -> Self {
        Self { backend, view, clock, in_flight: Cell::new(0) }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Requests sent and not yet answered
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    /// Write the current local date and time (minute precision) into the form
    pub fn fill_defaults(&self) -> FormInput {
        let defaults = FormInput::from_moment(self.clock.now());
        self.view.set_date(&defaults.date);
        self.view.set_time(&defaults.time);
        defaults
    }

    /// Entry point for the host's load lifecycle: defaults, then one fetch
    pub async fn initialize(&self) -> ChartResult<ChartImage> {
        let defaults = self.fill_defaults();
        crate::log_info!(COMPONENT, "📅 Form initialized with {} {}", defaults.date, defaults.time);
        self.request_chart().await
    }

    /// Read the form, send one request and show the result.
    ///
    /// Empty fields abort before any network call.
    pub async fn request_chart(&self) -> ChartResult<ChartImage> {
        let input = FormInput::new(self.view.date(), self.view.time());
        let request = match ChartRequest::from_input(&input) {
            Ok(request) => request,
            Err(err) => {
                get_logger().error(COMPONENT, "Date and time are required.");
                self.view.notify_error(&err.user_message());
                return Err(err);
            }
        };

        crate::log_debug!(COMPONENT, "📡 Requesting chart for {:?}", request);

        let result = {
            let _guard = InFlightGuard::enter(&self.in_flight);
            self.view.set_status(RequestStatus::AwaitingResponse);
            self.backend.fetch_chart(&request).await
        };

        match result {
            Ok(response) => {
                let image = response.image();
                self.view.set_chart_image(&image);
                self.settle(RequestStatus::Rendered);
                Ok(image)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn fail(&self, err: ChartFormError) -> ChartFormError {
        crate::log_error!(COMPONENT, "Error fetching chart: {}", err);
        self.view.notify_error(&err.user_message());
        self.settle(RequestStatus::Failed);
        err
    }

    // An outcome only becomes the status once nothing else is pending.
    fn settle(&self, outcome: RequestStatus) {
        if self.in_flight.get() == 0 {
            self.view.set_status(outcome);
        }
    }
}

struct InFlightGuard<'a>(&'a Cell<usize>);

impl<'a> InFlightGuard<'a> {
    fn enter(counter: &'a Cell<usize>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}
