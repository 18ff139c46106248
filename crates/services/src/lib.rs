#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod progress;
pub mod session;
pub mod views;

pub use study_core::Clock;

pub use app_services::AppServices;
pub use error::AppServicesError;
pub use progress::{ProgressState, ProgressWriter};
pub use session::ProgressSession;
pub use views::{
    DashboardVm, RoadmapItemVm, RoadmapVm, ScheduleItemVm, ScheduleVm, UnknownView, View,
    ViewModel,
};
