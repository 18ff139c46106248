#![forbid(unsafe_code)]

pub mod calendar;
pub mod model;
pub mod plan;
pub mod progress;
pub mod time;

pub use calendar::StudyCalendar;
pub use time::Clock;
