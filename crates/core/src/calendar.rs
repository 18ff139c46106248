//! Maps calendar dates onto plan weeks and day templates.

use chrono::{Datelike, NaiveDate};

use crate::model::{DayKind, WeekNumber};
use crate::plan::day_kind_for;

/// Dates of a 16-week plan. Each plan week runs seven days from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudyCalendar {
    start: NaiveDate,
}

impl StudyCalendar {
    /// The plan as published: Tuesday 6 January 2026 onwards.
    #[must_use]
    pub fn published() -> Self {
        // 2026-01-06 is a valid calendar date.
        let start = NaiveDate::from_ymd_opt(2026, 1, 6).unwrap_or(NaiveDate::MIN);
        Self { start }
    }

    /// Plan week containing `date`, clamped to the plan bounds.
    #[must_use]
    pub fn week_for(&self, date: NaiveDate) -> WeekNumber {
        let days = (date - self.start).num_days();
        WeekNumber::saturating(days.div_euclid(7) + 1)
    }

    /// Template followed on `date`.
    #[must_use]
    pub fn day_kind(&self, date: NaiveDate) -> DayKind {
        day_kind_for(date.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn published_plan_spans_sixteen_weeks() {
        let cal = StudyCalendar::published();
        assert_eq!(cal.week_for(date(2026, 1, 5)), WeekNumber::FIRST);
        assert_eq!(cal.week_for(date(2026, 4, 20)).value(), 15);
        assert_eq!(cal.week_for(date(2026, 4, 27)), WeekNumber::LAST);
    }

    #[test]
    fn maps_dates_to_weeks() {
        let cal = StudyCalendar::published();
        assert_eq!(cal.week_for(date(2026, 1, 6)).value(), 1);
        assert_eq!(cal.week_for(date(2026, 1, 12)).value(), 1);
        assert_eq!(cal.week_for(date(2026, 1, 13)).value(), 2);
        assert_eq!(cal.week_for(date(2026, 4, 26)).value(), 16);
    }

    #[test]
    fn clamps_outside_plan() {
        let cal = StudyCalendar::published();
        assert_eq!(cal.week_for(date(2025, 12, 1)), WeekNumber::FIRST);
        assert_eq!(cal.week_for(date(2026, 9, 1)), WeekNumber::LAST);
    }

    #[test]
    fn plan_week_starts_with_light_days() {
        let cal = StudyCalendar::published();
        assert_eq!(cal.day_kind(date(2026, 1, 6)), DayKind::Light);
        assert_eq!(cal.day_kind(date(2026, 1, 10)), DayKind::Heavy);
        assert_eq!(cal.day_kind(date(2026, 1, 12)), DayKind::Heavy);
    }
}
