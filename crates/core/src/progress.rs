//! Pure derivations over the progress model.

use crate::model::{TaskCompletion, WEEKS_PER_MONTH, WeekNumber};
use crate::plan::{ROADMAP, RoadmapEntry, study_days_per_week};

/// Completed study days against the weekly target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekProgress {
    pub completed: usize,
    pub total: usize,
}

impl WeekProgress {
    /// Completion percentage, capped at 100.
    ///
    /// A week has more checklist items than study days, so `completed` can
    /// exceed `total`.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 0;
        }
        let pct = (self.completed.min(self.total) * 100) / self.total;
        u8::try_from(pct).unwrap_or(100)
    }
}

/// Roadmap index for an unvalidated week value.
///
/// `floor((week - 1) / 4)` clamped to the roadmap bounds.
#[must_use]
pub fn month_index_for_raw(week: i64) -> usize {
    let last = ROADMAP.len() - 1;
    if week < 1 {
        return 0;
    }
    usize::try_from((week - 1) / i64::from(WEEKS_PER_MONTH))
        .map_or(last, |idx| idx.min(last))
}

/// Roadmap entry for the month containing `week`.
#[must_use]
pub fn month_info(week: WeekNumber) -> &'static RoadmapEntry {
    &ROADMAP[month_index_for_raw(i64::from(week.value()))]
}

/// Progress for `week`, counting only that week's completed tasks.
#[must_use]
pub fn week_progress(week: WeekNumber, tasks: &TaskCompletion) -> WeekProgress {
    WeekProgress {
        completed: tasks.completed_in_week(week),
        total: study_days_per_week(),
    }
}
