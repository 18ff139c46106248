use std::sync::Arc;

use storage::repository::ProgressStore;
use tokio::sync::{mpsc, oneshot};

use super::state::{ProgressState, persist};

enum WriteCommand {
    Persist(ProgressState),
    Flush(oneshot::Sender<()>),
}

/// Best-effort background persistence of progress snapshots.
///
/// `submit` never blocks and never fails; a single detached task applies
/// snapshots to the store in submission order. Snapshots still queued when a
/// newer one arrives are skipped, since every snapshot is a full copy of the
/// state. A failed write is logged and dropped without retry.
///
/// Nothing is guaranteed to be durable until `flush` has returned.
#[derive(Clone)]
pub struct ProgressWriter {
    tx: mpsc::UnboundedSender<WriteCommand>,
}

impl ProgressWriter {
    /// Starts the writer task for `store`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn spawn(store: Arc<dyn ProgressStore>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(store, rx));
        Self { tx }
    }

    /// Queues `state` for persistence and returns immediately.
    pub fn submit(&self, state: ProgressState) {
        if self.tx.send(WriteCommand::Persist(state)).is_err() {
            tracing::warn!("progress writer has stopped; snapshot dropped");
        }
    }

    /// Waits until every snapshot submitted before this call has been attempted.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.tx.send(WriteCommand::Flush(ack)).is_err() {
            return;
        }
        let _ = done.await;
    }
}

async fn run_writer(store: Arc<dyn ProgressStore>, mut rx: mpsc::UnboundedReceiver<WriteCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            WriteCommand::Persist(mut latest) => {
                let mut flush_after = None;
                while let Ok(next) = rx.try_recv() {
                    match next {
                        WriteCommand::Persist(newer) => latest = newer,
                        WriteCommand::Flush(ack) => {
                            flush_after = Some(ack);
                            break;
                        }
                    }
                }

                write(store.as_ref(), &latest).await;

                if let Some(ack) = flush_after {
                    let _ = ack.send(());
                }
            }
            WriteCommand::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    tracing::debug!("progress writer finished");
}

async fn write(store: &dyn ProgressStore, state: &ProgressState) {
    match persist(store, state).await {
        Ok(()) => tracing::debug!(week = %state.week, tasks = state.tasks.len(), "saved progress"),
        Err(err) => tracing::warn!(error = %err, week = %state.week, "error saving progress"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::{COMPLETED_TASKS_KEY, CURRENT_WEEK_KEY};
    use storage::repository::InMemoryStore;
    use study_core::model::WeekNumber;

    fn state_for_week(n: i64) -> ProgressState {
        ProgressState {
            week: WeekNumber::new(n).unwrap(),
            ..ProgressState::default()
        }
    }

    #[tokio::test]
    async fn flush_waits_for_submitted_snapshots() {
        let store = InMemoryStore::new();
        let writer = ProgressWriter::spawn(Arc::new(store.clone()));

        writer.submit(state_for_week(4));
        writer.flush().await;

        assert_eq!(store.snapshot(CURRENT_WEEK_KEY).as_deref(), Some("4"));
        assert_eq!(store.snapshot(COMPLETED_TASKS_KEY).as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn last_submission_wins() {
        let store = InMemoryStore::new();
        let writer = ProgressWriter::spawn(Arc::new(store.clone()));

        for week in 1..=9 {
            writer.submit(state_for_week(week));
        }
        writer.flush().await;

        assert_eq!(store.snapshot(CURRENT_WEEK_KEY).as_deref(), Some("9"));
    }

    #[tokio::test]
    async fn flush_without_writes_returns() {
        let writer = ProgressWriter::spawn(Arc::new(InMemoryStore::new()));
        writer.flush().await;
        writer.flush().await;
    }
}
