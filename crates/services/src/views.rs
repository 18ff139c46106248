use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use study_core::model::{DayKind, TOTAL_WEEKS, TaskId, WeekNumber};
use study_core::plan::{ActivityItem, ROADMAP, RoadmapEntry, ScheduleTemplate};
use study_core::progress::WeekProgress;

/// Screens that show derived progress state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    LightDays,
    HeavyDays,
    Roadmap,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Dashboard,
        View::LightDays,
        View::HeavyDays,
        View::Roadmap,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::LightDays => "light",
            View::HeavyDays => "heavy",
            View::Roadmap => "roadmap",
        }
    }

    /// Checklist view for tasks of `kind`.
    #[must_use]
    pub fn schedule_for(kind: DayKind) -> Self {
        match kind {
            DayKind::Light => View::LightDays,
            DayKind::Heavy => View::HeavyDays,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl fmt::Display for UnknownView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown view: {}", self.0)
    }
}

impl std::error::Error for UnknownView {}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.slug() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardVm {
    pub week: WeekNumber,
    pub total_weeks: u8,
    pub month: &'static RoadmapEntry,
    pub progress: WeekProgress,
    pub today: NaiveDate,
    pub today_kind: DayKind,
    /// Plan week that contains `today`, which may differ from the selected week.
    pub calendar_week: WeekNumber,
}

impl DashboardVm {
    #[must_use]
    pub fn new(
        week: WeekNumber,
        progress: WeekProgress,
        today: NaiveDate,
        today_kind: DayKind,
        calendar_week: WeekNumber,
    ) -> Self {
        Self {
            week,
            total_weeks: TOTAL_WEEKS,
            month: study_core::progress::month_info(week),
            progress,
            today,
            today_kind,
            calendar_week,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleItemVm {
    pub task_id: TaskId,
    pub item: &'static ActivityItem,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleVm {
    pub week: WeekNumber,
    pub template: &'static ScheduleTemplate,
    pub items: Vec<ScheduleItemVm>,
}

impl ScheduleVm {
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.items.iter().filter(|item| item.done).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapItemVm {
    pub number: usize,
    pub entry: &'static RoadmapEntry,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadmapVm {
    pub items: Vec<RoadmapItemVm>,
}

impl RoadmapVm {
    /// Roadmap with the month of `week` highlighted.
    #[must_use]
    pub fn for_week(week: WeekNumber) -> Self {
        let current = week.month_index();
        let items = ROADMAP
            .iter()
            .enumerate()
            .map(|(idx, entry)| RoadmapItemVm {
                number: idx + 1,
                entry,
                current: idx == current,
            })
            .collect();
        Self { items }
    }
}

/// Derived data for whichever view is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Dashboard(DashboardVm),
    Schedule(ScheduleVm),
    Roadmap(RoadmapVm),
}
