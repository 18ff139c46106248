//! Progress model: loading, mutating, and persisting the tracker state.

mod state;
mod writer;

pub use state::{ProgressState, load, persist};
pub use writer::ProgressWriter;

/// Store key holding the active week as a decimal string.
pub const CURRENT_WEEK_KEY: &str = "current-week";

/// Store key holding the completion map as a JSON object.
pub const COMPLETED_TASKS_KEY: &str = "completed-tasks";
