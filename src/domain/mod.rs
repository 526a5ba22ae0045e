pub mod chart_request;
pub mod clock;
pub mod errors;
pub mod logging;

pub use chart_request::{ChartImage, ChartRequest, ChartResponse, FormInput};
pub use clock::{Clock, LocalMoment};
pub use errors::{ChartFormError, ChartResult, FormField};
