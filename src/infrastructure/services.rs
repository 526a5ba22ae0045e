use crate::domain::{
    Clock, LocalMoment,
    logging::{LogEntry, LogLevel, Logger},
};

/// Console logger implementation for WASM environment
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    fn timestamp() -> String {
        let date = js_sys::Date::new_0();
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            date.get_hours(),
            date.get_minutes(),
            date.get_seconds(),
            date.get_milliseconds()
        )
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }
        let formatted = format!("[{}] {}", Self::timestamp(), entry.line());
        match entry.level {
            LogLevel::Debug => web_sys::console::debug_1(&formatted.into()),
            LogLevel::Info => web_sys::console::info_1(&formatted.into()),
            LogLevel::Warn => web_sys::console::warn_1(&formatted.into()),
            LogLevel::Error => web_sys::console::error_1(&formatted.into()),
        }
    }
}

/// Local wall clock from `js_sys::Date`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now(&self) -> LocalMoment {
        let date = js_sys::Date::new_0();
        LocalMoment::new(
            date.get_full_year() as i32,
            date.get_month() + 1,
            date.get_date(),
            date.get_hours(),
            date.get_minutes(),
        )
    }
}
