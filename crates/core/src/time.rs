use chrono::{DateTime, Local, NaiveDate, Utc};

/// A simple clock abstraction for deterministic time in services and tests.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(DateTime<Utc>),
}

impl Clock {
    /// Returns a clock that uses the current system time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given timestamp.
    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Calendar date the user is studying on.
    ///
    /// The system clock reports the local date; a fixed clock reports its UTC date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Default => Local::now().date_naive(),
            Clock::Fixed(t) => t.date_naive(),
        }
    }
}

/// Deterministic timestamp for tests (2026-01-13T12:00:00Z, Tuesday of plan week 2).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_768_305_600;

/// Returns a deterministic `DateTime<Utc>` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the deterministic test timestamp.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = fixed_clock();
        let today = clock.today();
        assert_eq!(today, NaiveDate::from_ymd_opt(2026, 1, 13).unwrap());
        assert_eq!(today.weekday(), Weekday::Tue);
    }

    #[test]
    fn fixed_clock_ignores_time_of_day() {
        let late = DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP + 11 * 3600, 0).unwrap();
        assert_eq!(Clock::fixed(late).today(), fixed_clock().today());
    }
}
