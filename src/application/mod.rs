pub mod chart_form;
pub mod ports;

pub use chart_form::*;
pub use ports::*;
