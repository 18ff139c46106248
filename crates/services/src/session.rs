use std::sync::Arc;

use storage::repository::ProgressStore;
use study_core::StudyCalendar;
use study_core::model::{DayKind, TaskCompletion, TaskId, WeekNumber};
use study_core::plan::template_for;

use crate::Clock;
use crate::progress::{self, ProgressState, ProgressWriter};
use crate::views::{DashboardVm, RoadmapVm, ScheduleItemVm, ScheduleVm, View, ViewModel};

/// Owns the progress model for one user session.
///
/// Mutations update the in-memory state first and queue a full snapshot for
/// persistence without waiting for it. The in-memory state stays the source of
/// truth for the rest of the session even if a write fails.
pub struct ProgressSession {
    state: ProgressState,
    loading: bool,
    view: View,
    store: Arc<dyn ProgressStore>,
    writer: ProgressWriter,
    clock: Clock,
    calendar: StudyCalendar,
}

impl ProgressSession {
    /// Creates a session with default state, still marked as loading.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn new(store: Arc<dyn ProgressStore>, clock: Clock) -> Self {
        let writer = ProgressWriter::spawn(Arc::clone(&store));
        Self {
            state: ProgressState::default(),
            loading: true,
            view: View::default(),
            store,
            writer,
            clock,
            calendar: StudyCalendar::published(),
        }
    }

    /// Creates a session and loads saved progress.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub async fn open(store: Arc<dyn ProgressStore>, clock: Clock) -> Self {
        let mut session = Self::new(store, clock);
        session.load().await;
        session
    }

    /// Replaces the in-memory state with whatever the store holds.
    ///
    /// Never fails; unreadable values fall back to defaults. The session
    /// leaves the loading state afterwards either way.
    pub async fn load(&mut self) {
        self.state = progress::load(self.store.as_ref()).await;
        self.loading = false;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn week(&self) -> WeekNumber {
        self.state.week
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskCompletion {
        &self.state.tasks
    }

    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Flips completion of `id`, queues a save, and returns the new flag.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let done = self.state.toggle_task(id);
        tracing::info!(task = %id, done, "toggled task");
        self.writer.submit(self.state.clone());
        done
    }

    /// Switches the active week and queues a save.
    pub fn change_week(&mut self, week: WeekNumber) {
        self.state.change_week(week);
        tracing::info!(%week, "changed week");
        self.writer.submit(self.state.clone());
    }

    /// Switches to the plan week containing today's date.
    pub fn change_week_to_today(&mut self) -> WeekNumber {
        let week = self.calendar.week_for(self.clock.today());
        self.change_week(week);
        week
    }

    /// Waits for queued saves to be attempted.
    pub async fn flush(&self) {
        self.writer.flush().await;
    }

    pub fn select_view(&mut self, view: View) {
        self.view = view;
    }

    /// Derived data for the selected view.
    #[must_use]
    pub fn render(&self) -> ViewModel {
        match self.view {
            View::Dashboard => ViewModel::Dashboard(self.dashboard()),
            View::LightDays => ViewModel::Schedule(self.schedule(DayKind::Light)),
            View::HeavyDays => ViewModel::Schedule(self.schedule(DayKind::Heavy)),
            View::Roadmap => ViewModel::Roadmap(self.roadmap()),
        }
    }

    #[must_use]
    pub fn dashboard(&self) -> DashboardVm {
        let today = self.clock.today();
        DashboardVm::new(
            self.state.week,
            self.state.week_progress(),
            today,
            self.calendar.day_kind(today),
            self.calendar.week_for(today),
        )
    }

    /// Checklist of the active week for one day template.
    #[must_use]
    pub fn schedule(&self, kind: DayKind) -> ScheduleVm {
        let template = template_for(kind);
        let week = self.state.week;
        let items = TaskId::all_for_week(week)
            .into_iter()
            .filter(|id| id.kind() == kind)
            .filter_map(|task_id| {
                template.items.get(task_id.index()).map(|item| ScheduleItemVm {
                    task_id,
                    item,
                    done: self.state.tasks.is_done(&task_id),
                })
            })
            .collect();
        ScheduleVm {
            week,
            template,
            items,
        }
    }

    #[must_use]
    pub fn roadmap(&self) -> RoadmapVm {
        RoadmapVm::for_week(self.state.week)
    }
}
