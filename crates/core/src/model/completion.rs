use serde::Serialize;
use std::collections::BTreeMap;

use crate::model::task::TaskId;
use crate::model::week::WeekNumber;

/// Completion flags keyed by task id string.
///
/// Keys are kept as raw strings so that entries written by other versions of
/// the tracker survive a load/save cycle untouched. Keys are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskCompletion(BTreeMap<String, bool>);

impl TaskCompletion {
    /// Parses the persisted JSON object form.
    ///
    /// Entries whose value is not a boolean are dropped; their keys are
    /// returned alongside the map so the caller can report them.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `raw` is not a JSON object.
    pub fn from_json(raw: &str) -> Result<(Self, Vec<String>), serde_json::Error> {
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(raw)?;
        let mut tasks = BTreeMap::new();
        let mut skipped = Vec::new();
        for (key, value) in entries {
            match value.as_bool() {
                Some(done) => {
                    tasks.insert(key, done);
                }
                None => skipped.push(key),
            }
        }
        Ok((Self(tasks), skipped))
    }

    /// Serializes into the persisted JSON object form.
    #[must_use]
    pub fn to_json(&self) -> String {
        // A string-keyed map of bools always serializes.
        serde_json::to_string(self).unwrap_or_else(|_| String::from("{}"))
    }

    #[must_use]
    pub fn is_done(&self, id: &TaskId) -> bool {
        self.get(&id.to_string()).unwrap_or(false)
    }

    /// Raw lookup. `None` means the task was never toggled.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    /// Flips the flag for `id` (absent counts as not done) and returns the new value.
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        let entry = self.0.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }

    /// Number of tasks of `week` currently marked done.
    ///
    /// Only keys with the exact `week{N}-` prefix count, so `week1-` never
    /// matches `week10-` entries.
    #[must_use]
    pub fn completed_in_week(&self, week: WeekNumber) -> usize {
        let prefix = week.task_prefix();
        self.0
            .iter()
            .filter(|(key, done)| **done && key.starts_with(&prefix))
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for TaskCompletion {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
