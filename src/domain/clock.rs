/// Local wall-clock moment at minute precision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl LocalMoment {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self { year, month, day, hour, minute }
    }

    /// `YYYY-MM-DD`, the value format of `<input type="date">`
    pub fn date_string(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }

    /// `HH:MM`, the value format of `<input type="time">` without seconds
    pub fn time_string(&self) -> String {
        format!("{:02}:{:02}", self.hour, self.minute)
    }
}

/// Source of the current local moment
pub trait Clock {
    fn now(&self) -> LocalMoment;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_single_digit_components() {
        let moment = LocalMoment::new(2024, 3, 7, 9, 5);
        assert_eq!(moment.date_string(), "2024-03-07");
        assert_eq!(moment.time_string(), "09:05");
    }

    #[test]
    fn midnight_is_zero_padded() {
        let moment = LocalMoment::new(1999, 12, 31, 0, 0);
        assert_eq!(moment.time_string(), "00:00");
    }
}
