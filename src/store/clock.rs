use chrono::NaiveDate;

/// Source of "now" for status derivation and id assignment.
pub trait Clock {
    /// Current calendar date in the user's time zone.
    fn today(&self) -> NaiveDate;

    /// Current Unix time in milliseconds.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

/// Clock frozen at a given date and instant.
#[cfg(test)]
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock {
    pub(crate) today: NaiveDate,
    pub(crate) millis: i64,
}

#[cfg(test)]
impl FixedClock {
    pub(crate) fn on(year: i32, month: u32, day: u32) -> Self {
        let today = NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default();
        let millis = today
            .and_hms_opt(12, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis())
            .unwrap_or_default();
        Self { today, millis }
    }
}

#[cfg(test)]
impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn now_millis(&self) -> i64 {
        self.millis
    }
}
