pub mod dom;
pub mod http;
pub mod services;

pub use dom::{BrowserNotifier, DomChartView};
pub use http::ChartHttpClient;
pub use services::{BrowserClock, ConsoleLogger};
