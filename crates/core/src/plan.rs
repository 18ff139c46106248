//! Fixed study-plan content: the two day templates and the four-month roadmap.

use chrono::Weekday;

use crate::model::DayKind;

/// One timed activity of a study day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityItem {
    pub duration: &'static str,
    pub activity: &'static str,
    pub task: &'static str,
}

/// A study-day template shared by every weekday of the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleTemplate {
    pub kind: DayKind,
    pub days: &'static [Weekday],
    pub time_budget: &'static str,
    pub focus: &'static str,
    pub items: &'static [ActivityItem],
}

impl ScheduleTemplate {
    #[must_use]
    pub fn covers(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }
}

/// One month of the roadmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoadmapEntry {
    pub month: &'static str,
    pub title: &'static str,
    pub goal: &'static str,
    pub focus: &'static str,
}

pub static LIGHT_DAY: ScheduleTemplate = ScheduleTemplate {
    kind: DayKind::Light,
    days: &[Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
    time_budget: "1.5 - 2 Hours",
    focus: "Input, Vocab Accumulation, Maintenance",
    items: &[
        ActivityItem {
            duration: "30 Min",
            activity: "Active Listening",
            task: "Podcast: The Economist, HBR IdeaCast, or IELTS Energy. Write down 3 phrases you hear.",
        },
        ActivityItem {
            duration: "45 Min",
            activity: "Focused Skill",
            task: "Tue/Thu: Reading (1 passage + summarize). Wed/Fri: Listening (2 sections).",
        },
        ActivityItem {
            duration: "15 Min",
            activity: "Vocab Review",
            task: "Review flashcards. Create 1 sentence for each new word relating to Dublin/Marketing.",
        },
        ActivityItem {
            duration: "30 Min",
            activity: "Speaking (Shadowing)",
            task: "Shadow a Band 9 video. Record yourself and compare.",
        },
    ],
};

pub static HEAVY_DAY: ScheduleTemplate = ScheduleTemplate {
    kind: DayKind::Heavy,
    days: &[Weekday::Sat, Weekday::Sun, Weekday::Mon],
    time_budget: "3 - 4 Hours",
    focus: "Output, Critical Thinking, Full Simulations",
    items: &[
        ActivityItem {
            duration: "60 Min",
            activity: "Writing Task 2",
            task: "15 min plan (PEEL method) + 40 min write + 5 min check grammar.",
        },
        ActivityItem {
            duration: "60 Min",
            activity: "Full Practice Test",
            task: "Sat: Reading Full Test. Sun: Listening. Mon: Writing Task 1.",
        },
        ActivityItem {
            duration: "60 Min",
            activity: "Review & Analysis",
            task: "Analyze mistakes. Why wrong? Vocab? Logic? Distraction?",
        },
        ActivityItem {
            duration: "45 Min",
            activity: "Speaking Part 2 & 3",
            task: "Record Cue Card (2 mins). Listen back. Re-record until perfect.",
        },
    ],
};

pub static ROADMAP: [RoadmapEntry; 4] = [
    RoadmapEntry {
        month: "Month 1 (Jan)",
        title: "Foundation & Accuracy",
        goal: "Stop making \"silly\" mistakes (singular/plural, tenses)",
        focus: "Review Articles (a/an/the) and Subject-Verb Agreement",
    },
    RoadmapEntry {
        month: "Month 2 (Feb)",
        title: "Lexical Resource & Structure",
        goal: "Inject \"Less Common\" vocabulary",
        focus: "Replace basic words with precise ones. Master cohesion and signposting.",
    },
    RoadmapEntry {
        month: "Month 3 (Mar)",
        title: "Speed & Critical Thinking",
        goal: "Speed up Reading/Writing",
        focus: "Practice skimming vs scanning. 5-minute essay plans. Intelligent stalling.",
    },
    RoadmapEntry {
        month: "Month 4 (Apr)",
        title: "Exam Mode",
        goal: "Build stamina",
        focus: "Full 2hr 40min tests every Sunday. Perfect what you know.",
    },
];

#[must_use]
pub fn template_for(kind: DayKind) -> &'static ScheduleTemplate {
    match kind {
        DayKind::Light => &LIGHT_DAY,
        DayKind::Heavy => &HEAVY_DAY,
    }
}

/// The template a weekday follows. Every weekday belongs to exactly one.
#[must_use]
pub fn day_kind_for(day: Weekday) -> DayKind {
    if HEAVY_DAY.covers(day) {
        DayKind::Heavy
    } else {
        DayKind::Light
    }
}

/// Study days per week across both templates.
///
/// One completion is expected per study day, so this is the denominator of
/// the weekly progress ratio.
#[must_use]
pub fn study_days_per_week() -> usize {
    LIGHT_DAY.days.len() + HEAVY_DAY.days.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn templates_partition_the_week() {
        let all = [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ];
        for day in all {
            assert!(
                LIGHT_DAY.covers(day) ^ HEAVY_DAY.covers(day),
                "{day} must belong to exactly one template"
            );
        }
        assert_eq!(study_days_per_week(), 7);
    }

    #[test]
    fn each_template_has_four_activities() {
        assert_eq!(LIGHT_DAY.items.len(), 4);
        assert_eq!(HEAVY_DAY.items.len(), 4);
        assert_eq!(template_for(DayKind::Heavy).items[2].activity, "Review & Analysis");
    }

    #[test]
    fn weekday_maps_to_kind() {
        assert_eq!(day_kind_for(Weekday::Tue), DayKind::Light);
        assert_eq!(day_kind_for(Weekday::Fri), DayKind::Light);
        assert_eq!(day_kind_for(Weekday::Sat), DayKind::Heavy);
        assert_eq!(day_kind_for(Weekday::Mon), DayKind::Heavy);
    }

    #[test]
    fn roadmap_months_in_order() {
        assert_eq!(ROADMAP[0].title, "Foundation & Accuracy");
        assert_eq!(ROADMAP[3].title, "Exam Mode");
    }
}
