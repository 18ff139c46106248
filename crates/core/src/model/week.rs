use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of weeks in the study plan.
pub const TOTAL_WEEKS: u8 = 16;

/// Number of plan weeks covered by one roadmap month.
pub const WEEKS_PER_MONTH: u8 = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WeekError {
    #[error("week must be between 1 and {TOTAL_WEEKS}, got {0}")]
    OutOfRange(i64),

    #[error("week is not a number: {0:?}")]
    NotANumber(String),
}

/// The active study week, always within `1..=16`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekNumber(u8);

impl WeekNumber {
    pub const FIRST: Self = Self(1);
    pub const LAST: Self = Self(TOTAL_WEEKS);

    /// Creates a `WeekNumber`.
    ///
    /// # Errors
    ///
    /// Returns `WeekError::OutOfRange` if `value` is outside `1..=16`.
    pub fn new(value: i64) -> Result<Self, WeekError> {
        u8::try_from(value)
            .ok()
            .filter(|week| (1..=TOTAL_WEEKS).contains(week))
            .map(Self)
            .ok_or(WeekError::OutOfRange(value))
    }

    /// Clamps an arbitrary integer into the plan range.
    #[must_use]
    pub fn saturating(value: i64) -> Self {
        let clamped = value.clamp(1, i64::from(TOTAL_WEEKS));
        // In range after clamping.
        Self(u8::try_from(clamped).unwrap_or(1))
    }

    /// Returns the underlying week value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index of the roadmap month this week belongs to.
    #[must_use]
    pub fn month_index(self) -> usize {
        usize::from((self.0 - 1) / WEEKS_PER_MONTH)
    }

    /// Prefix shared by every task id of this week (`week{N}-`).
    #[must_use]
    pub fn task_prefix(self) -> String {
        format!("week{}-", self.0)
    }
}

impl Default for WeekNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Debug for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeekNumber({})", self.0)
    }
}

impl fmt::Display for WeekNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WeekNumber {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value = trimmed
            .parse::<i64>()
            .map_err(|_| WeekError::NotANumber(trimmed.to_string()))?;
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plan_bounds() {
        assert_eq!(WeekNumber::new(1).unwrap(), WeekNumber::FIRST);
        assert_eq!(WeekNumber::new(16).unwrap(), WeekNumber::LAST);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(WeekNumber::new(0), Err(WeekError::OutOfRange(0)));
        assert_eq!(WeekNumber::new(17), Err(WeekError::OutOfRange(17)));
        assert_eq!(WeekNumber::new(-3), Err(WeekError::OutOfRange(-3)));
        assert_eq!(WeekNumber::new(300), Err(WeekError::OutOfRange(300)));
    }

    #[test]
    fn parses_decimal_string() {
        let week: WeekNumber = "3".parse().unwrap();
        assert_eq!(week.value(), 3);
        let padded: WeekNumber = " 12\n".parse().unwrap();
        assert_eq!(padded.value(), 12);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            "three".parse::<WeekNumber>(),
            Err(WeekError::NotANumber(_))
        ));
        assert!(matches!(
            "3abc".parse::<WeekNumber>(),
            Err(WeekError::NotANumber(_))
        ));
        assert_eq!("42".parse::<WeekNumber>(), Err(WeekError::OutOfRange(42)));
    }

    #[test]
    fn saturating_clamps() {
        assert_eq!(WeekNumber::saturating(-5), WeekNumber::FIRST);
        assert_eq!(WeekNumber::saturating(99), WeekNumber::LAST);
        assert_eq!(WeekNumber::saturating(7).value(), 7);
    }

    #[test]
    fn month_index_groups_four_weeks() {
        let idx = |w| WeekNumber::new(w).unwrap().month_index();
        assert_eq!(idx(1), 0);
        assert_eq!(idx(4), 0);
        assert_eq!(idx(5), 1);
        assert_eq!(idx(12), 2);
        assert_eq!(idx(16), 3);
    }

    #[test]
    fn task_prefix_ends_with_separator() {
        assert_eq!(WeekNumber::FIRST.task_prefix(), "week1-");
        assert_eq!(WeekNumber::LAST.task_prefix(), "week16-");
    }
}
