use study_core::model::{TaskCompletion, TaskId, WeekNumber};
use study_core::plan::RoadmapEntry;
use study_core::progress::{WeekProgress, month_info, week_progress};
use storage::repository::{ProgressStore, StorageError};

use super::{COMPLETED_TASKS_KEY, CURRENT_WEEK_KEY};

/// The persisted part of a tracker session: active week plus completion flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub week: WeekNumber,
    pub tasks: TaskCompletion,
}

impl ProgressState {
    /// Flips completion of `id` and returns the new flag.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        self.tasks.toggle(id)
    }

    pub fn change_week(&mut self, week: WeekNumber) {
        self.week = week;
    }

    /// Roadmap month for the active week.
    #[must_use]
    pub fn month_info(&self) -> &'static RoadmapEntry {
        month_info(self.week)
    }

    /// Progress of the active week.
    #[must_use]
    pub fn week_progress(&self) -> WeekProgress {
        week_progress(self.week, &self.tasks)
    }
}

/// Reconstructs progress from `store`.
///
/// Never fails: a missing, unreadable, or malformed value falls back to its
/// default (week 1, no completed tasks) and is logged. Each key recovers
/// independently.
pub async fn load(store: &dyn ProgressStore) -> ProgressState {
    let week = load_week(store).await;
    let tasks = load_tasks(store).await;
    tracing::debug!(%week, tasks = tasks.len(), "loaded progress");
    ProgressState { week, tasks }
}

async fn load_week(store: &dyn ProgressStore) -> WeekNumber {
    match store.get(CURRENT_WEEK_KEY).await {
        Ok(Some(raw)) if !raw.is_empty() => raw.parse().unwrap_or_else(|err| {
            tracing::warn!(error = %err, raw = %raw, "ignoring saved week");
            WeekNumber::default()
        }),
        Ok(_) => {
            tracing::debug!("no saved week yet");
            WeekNumber::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read saved week");
            WeekNumber::default()
        }
    }
}

async fn load_tasks(store: &dyn ProgressStore) -> TaskCompletion {
    match store.get(COMPLETED_TASKS_KEY).await {
        Ok(Some(raw)) if !raw.is_empty() => match TaskCompletion::from_json(&raw) {
            Ok((tasks, skipped)) => {
                for key in &skipped {
                    tracing::warn!(task = %key, "ignoring non-boolean saved task entry");
                }
                tasks
            }
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed saved tasks");
                TaskCompletion::default()
            }
        },
        Ok(_) => {
            tracing::debug!("no saved tasks yet");
            TaskCompletion::default()
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read saved tasks");
            TaskCompletion::default()
        }
    }
}

/// Writes the full `state` to `store`: week first, then the task map.
///
/// # Errors
///
/// Returns the first `StorageError`; the task map is not written if the week
/// write failed.
pub async fn persist(
    store: &dyn ProgressStore,
    state: &ProgressState,
) -> Result<(), StorageError> {
    store.set(CURRENT_WEEK_KEY, &state.week.to_string()).await?;
    store.set(COMPLETED_TASKS_KEY, &state.tasks.to_json()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryStore;

    fn week(n: i64) -> WeekNumber {
        WeekNumber::new(n).unwrap()
    }

    #[tokio::test]
    async fn empty_store_yields_defaults() {
        let store = InMemoryStore::new();
        let state = load(&store).await;
        assert_eq!(state.week, WeekNumber::FIRST);
        assert!(state.tasks.is_empty());
    }

    #[tokio::test]
    async fn malformed_tasks_fall_back_to_empty() {
        let store = InMemoryStore::with_entries([
            (CURRENT_WEEK_KEY, "6"),
            (COMPLETED_TASKS_KEY, "{not json"),
        ]);
        let state = load(&store).await;
        assert_eq!(state.week, week(6));
        assert!(state.tasks.is_empty());
    }

    #[tokio::test]
    async fn non_boolean_entries_do_not_discard_the_rest() {
        let store = InMemoryStore::with_entries([(
            COMPLETED_TASKS_KEY,
            r#"{"week1-light-0":true,"week1-heavy-0":null}"#,
        )]);
        let mut state = load(&store).await;
        assert_eq!(state.week_progress().completed, 1);
        assert_eq!(state.tasks.len(), 1);

        // The next save keeps the valid entry.
        state.toggle_task(&"week1-heavy-1".parse().unwrap());
        persist(&store, &state).await.unwrap();
        assert_eq!(
            store.snapshot(COMPLETED_TASKS_KEY).as_deref(),
            Some(r#"{"week1-heavy-1":true,"week1-light-0":true}"#)
        );
    }

    #[tokio::test]
    async fn bad_week_values_fall_back_to_first() {
        for raw in ["abc", "0", "17", "-2", ""] {
            let store = InMemoryStore::with_entries([(CURRENT_WEEK_KEY, raw)]);
            let state = load(&store).await;
            assert_eq!(state.week, WeekNumber::FIRST, "raw week {raw:?}");
        }
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let store = InMemoryStore::new();
        let mut state = ProgressState::default();
        state.change_week(week(11));
        state.toggle_task(&"week11-heavy-3".parse().unwrap());
        state.toggle_task(&"week2-light-1".parse().unwrap());

        persist(&store, &state).await.unwrap();

        assert_eq!(load(&store).await, state);
        assert_eq!(store.snapshot(CURRENT_WEEK_KEY).as_deref(), Some("11"));
    }

    #[test]
    fn derived_views_follow_active_week() {
        let mut state = ProgressState::default();
        state.toggle_task(&"week5-light-0".parse().unwrap());
        assert_eq!(state.week_progress().completed, 0);

        state.change_week(week(5));
        assert_eq!(state.week_progress().completed, 1);
        assert_eq!(state.week_progress().total, 7);
        assert_eq!(state.month_info().title, "Lexical Resource & Structure");
    }
}
