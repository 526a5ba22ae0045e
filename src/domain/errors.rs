use derive_more::Display;

/// Form field a chart request is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum FormField {
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
}

/// The two ways a chart request can fail
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ChartFormError {
    /// Date or time field is empty (or not made of integers)
    #[display(fmt = "Missing input: {}", _0)]
    MissingInput(FormField),
    /// Transport error, HTTP error status or undecodable payload
    #[display(fmt = "{}", _0)]
    RequestFailure(String),
}

impl ChartFormError {
    pub fn request_failure(message: impl Into<String>) -> Self {
        ChartFormError::RequestFailure(message.into())
    }

    /// Text shown to the user in the blocking notification
    pub fn user_message(&self) -> String {
        match self {
            ChartFormError::MissingInput(_) => "Please select both date and time!".to_string(),
            ChartFormError::RequestFailure(msg) => format!("Failed to fetch chart: {}", msg),
        }
    }
}

impl std::error::Error for ChartFormError {}

pub type ChartResult<T> = Result<T, ChartFormError>;
