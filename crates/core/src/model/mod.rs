mod completion;
mod task;
mod week;

pub use completion::TaskCompletion;
pub use task::{DayKind, TaskId, TaskIdError};
pub use week::{TOTAL_WEEKS, WEEKS_PER_MONTH, WeekError, WeekNumber};
