use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::week::{WeekError, WeekNumber};
use crate::plan::template_for;

/// Which study-day template a task belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayKind {
    Light,
    Heavy,
}

impl DayKind {
    pub const ALL: [DayKind; 2] = [DayKind::Light, DayKind::Heavy];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            DayKind::Light => "light",
            DayKind::Heavy => "heavy",
        }
    }

    #[must_use]
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "light" => Some(DayKind::Light),
            "heavy" => Some(DayKind::Heavy),
            _ => None,
        }
    }
}

impl fmt::Display for DayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TaskIdError {
    #[error("task id must look like week<N>-<light|heavy>-<index>, got {0:?}")]
    Malformed(String),

    #[error("unknown day kind {0:?}")]
    UnknownDayKind(String),

    #[error(transparent)]
    Week(#[from] WeekError),

    #[error("{kind} days have {len} activities, index {index} is out of range")]
    IndexOutOfRange {
        kind: DayKind,
        index: usize,
        len: usize,
    },
}

/// One checklist item: a schedule activity within a given week.
///
/// The canonical string form `week{N}-{light|heavy}-{index}` is also the key
/// under which completion is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId {
    week: WeekNumber,
    kind: DayKind,
    index: usize,
}

impl TaskId {
    /// Creates a task id for an activity of the given day template.
    ///
    /// # Errors
    ///
    /// Returns `TaskIdError::IndexOutOfRange` if the template has no activity at `index`.
    pub fn new(week: WeekNumber, kind: DayKind, index: usize) -> Result<Self, TaskIdError> {
        let len = template_for(kind).items.len();
        if index >= len {
            return Err(TaskIdError::IndexOutOfRange { kind, index, len });
        }
        Ok(Self { week, kind, index })
    }

    #[must_use]
    pub fn week(&self) -> WeekNumber {
        self.week
    }

    #[must_use]
    pub fn kind(&self) -> DayKind {
        self.kind
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Every task of the given week, light activities first.
    #[must_use]
    pub fn all_for_week(week: WeekNumber) -> Vec<Self> {
        DayKind::ALL
            .iter()
            .flat_map(|&kind| {
                (0..template_for(kind).items.len()).map(move |index| Self { week, kind, index })
            })
            .collect()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week{}-{}-{}", self.week, self.kind, self.index)
    }
}

impl FromStr for TaskId {
    type Err = TaskIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TaskIdError::Malformed(s.to_string());

        let rest = s.strip_prefix("week").ok_or_else(malformed)?;
        let mut parts = rest.splitn(3, '-');
        let (Some(week), Some(kind), Some(index)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed());
        };

        if week.is_empty() || !week.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let week: WeekNumber = week.parse()?;
        let kind =
            DayKind::from_slug(kind).ok_or_else(|| TaskIdError::UnknownDayKind(kind.to_string()))?;
        let index: usize = index.parse().map_err(|_| malformed())?;

        Self::new(week, kind, index)
    }
}
