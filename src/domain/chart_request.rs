use derive_more::{Constructor, From, Into};
use serde::{Deserialize, Serialize};

use crate::domain::clock::LocalMoment;
use crate::domain::errors::{ChartFormError, ChartResult, FormField};

/// Prefix turning a base64 PNG payload into an image source
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Raw values of the date and time inputs
#[derive(Debug, Clone, PartialEq, Eq, Default, Constructor)]
pub struct FormInput {
    pub date: String,
    pub time: String,
}

impl FormInput {
    /// Defaults shown after load: local date and local time truncated to minutes
    pub fn from_moment(moment: LocalMoment) -> Self {
        Self { date: moment.date_string(), time: moment.time_string() }
    }
}

/// Body of `POST /chart`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl ChartRequest {
    /// Build a request from the form fields.
    ///
    /// Only presence is checked. Calendar ranges are left to the date/time
    /// picker and the backend. A part that is not an integer counts as a
    /// missing value for its field.
    pub fn from_input(input: &FormInput) -> ChartResult<Self> {
        let date = input.date.trim();
        let time = input.time.trim();
        if date.is_empty() {
            return Err(ChartFormError::MissingInput(FormField::Date));
        }
        if time.is_empty() {
            return Err(ChartFormError::MissingInput(FormField::Time));
        }

        let (year, month, day) = parse_date(date)?;
        let (hour, minute) = parse_time(time)?;
        Ok(Self { year, month, day, hour, minute })
    }
}

impl From<LocalMoment> for ChartRequest {
    fn from(m: LocalMoment) -> Self {
        Self { year: m.year, month: m.month, day: m.day, hour: m.hour, minute: m.minute }
    }
}

fn parse_date(date: &str) -> ChartResult<(i32, u32, u32)> {
    let missing = || ChartFormError::MissingInput(FormField::Date);
    let mut parts = date.split('-');
    let year = parts.next().and_then(|p| p.parse::<i32>().ok()).ok_or_else(missing)?;
    let month = parts.next().and_then(|p| p.parse::<u32>().ok()).ok_or_else(missing)?;
    let day = parts.next().and_then(|p| p.parse::<u32>().ok()).ok_or_else(missing)?;
    if parts.next().is_some() {
        return Err(missing());
    }
    Ok((year, month, day))
}

// Seconds, present when the picker has a `step` below 60, must be numeric
// (`SS` or `SS.mmm`) and are then dropped.
fn parse_time(time: &str) -> ChartResult<(u32, u32)> {
    let missing = || ChartFormError::MissingInput(FormField::Time);
    let mut parts = time.split(':');
    let hour = parts.next().and_then(|p| p.parse::<u32>().ok()).ok_or_else(missing)?;
    let minute = parts.next().and_then(|p| p.parse::<u32>().ok()).ok_or_else(missing)?;
    if let Some(seconds) = parts.next() {
        if !is_seconds(seconds) {
            return Err(missing());
        }
    }
    if parts.next().is_some() {
        return Err(missing());
    }
    Ok((hour, minute))
}

fn is_seconds(part: &str) -> bool {
    let all_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    match part.split_once('.') {
        Some((whole, fraction)) => all_digits(whole) && all_digits(fraction),
        None => all_digits(part),
    }
}

/// Successful response of `POST /chart`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResponse {
    pub chart: String,
}

impl ChartResponse {
    pub fn image(self) -> ChartImage {
        ChartImage(self.chart)
    }
}

/// Base64-encoded PNG returned by the backend
#[derive(Debug, Clone, PartialEq, Eq, From, Into)]
pub struct ChartImage(String);

impl ChartImage {
    pub fn base64(&self) -> &str {
        &self.0
    }

    pub fn data_uri(&self) -> String {
        format!("{}{}", PNG_DATA_URI_PREFIX, self.0)
    }
}
