use derive_more::Display;

use crate::domain::{ChartImage, ChartRequest, ChartResponse, ChartResult};

/// Lifecycle of the most recent chart request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum RequestStatus {
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "awaiting response")]
    AwaitingResponse,
    #[display(fmt = "rendered")]
    Rendered,
    #[display(fmt = "failed")]
    Failed,
}

/// Chart-rendering backend reached over HTTP
#[allow(async_fn_in_trait)]
pub trait ChartBackend {
    async fn fetch_chart(&self, request: &ChartRequest) -> ChartResult<ChartResponse>;
}

/// Host page surface the controller reads from and writes to
pub trait ChartView {
    fn date(&self) -> String;
    fn set_date(&self, value: &str);
    fn time(&self) -> String;
    fn set_time(&self, value: &str);
    fn set_chart_image(&self, image: &ChartImage);
    /// Blocking notification (or its equivalent) for the user
    fn notify_error(&self, message: &str);

    fn set_status(&self, _status: RequestStatus) {}
}
