//! Plain-text rendering of view models for the terminal.

use std::fmt::Write as _;

use services::{DashboardVm, RoadmapVm, ScheduleVm, ViewModel};

const BAR_WIDTH: usize = 28;

#[must_use]
pub fn render(vm: &ViewModel) -> String {
    match vm {
        ViewModel::Dashboard(vm) => dashboard(vm),
        ViewModel::Schedule(vm) => schedule(vm),
        ViewModel::Roadmap(vm) => roadmap(vm),
    }
}

#[must_use]
pub fn dashboard(vm: &DashboardVm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Week {} of {}", vm.week, vm.total_weeks);
    let _ = writeln!(out, "{}: {}", vm.month.month, vm.month.title);
    let _ = writeln!(out, "{}", progress_bar(usize::from(vm.progress.percent())));
    let _ = writeln!(
        out,
        "{} of {} days completed this week",
        vm.progress.completed, vm.progress.total
    );
    out.push('\n');
    let _ = writeln!(out, "Goal:  {}", vm.month.goal);
    let _ = writeln!(out, "Focus: {}", vm.month.focus);
    out.push('\n');
    let _ = write!(out, "Today ({}) is a {} day", vm.today, vm.today_kind);
    if vm.calendar_week != vm.week {
        let _ = write!(out, " of plan week {}", vm.calendar_week);
    }
    out.push('\n');
    out
}

#[must_use]
pub fn schedule(vm: &ScheduleVm) -> String {
    let mut out = String::new();
    let template = vm.template;
    let days: Vec<String> = template.days.iter().map(ToString::to_string).collect();
    let _ = writeln!(
        out,
        "Week {} {} days: {}",
        vm.week,
        template.kind,
        days.join(", ")
    );
    let _ = writeln!(
        out,
        "Total Time: {} | Focus: {}",
        template.time_budget, template.focus
    );
    let _ = writeln!(out, "{} of {} done", vm.done_count(), vm.items.len());
    out.push('\n');
    for entry in &vm.items {
        let mark = if entry.done { 'x' } else { ' ' };
        let _ = writeln!(
            out,
            "[{mark}] {:<15} {:>7}  {}",
            entry.task_id.to_string(),
            entry.item.duration,
            entry.item.activity
        );
        let _ = writeln!(out, "    {}", entry.item.task);
    }
    out
}

#[must_use]
pub fn roadmap(vm: &RoadmapVm) -> String {
    let mut out = String::new();
    for item in &vm.items {
        let marker = if item.current { '>' } else { ' ' };
        let _ = writeln!(
            out,
            "{marker} {}. {}: {}",
            item.number, item.entry.month, item.entry.title
        );
        let _ = writeln!(out, "     Goal:  {}", item.entry.goal);
        let _ = writeln!(out, "     Focus: {}", item.entry.focus);
    }
    out
}

fn progress_bar(percent: usize) -> String {
    let filled = (percent.min(100) * BAR_WIDTH) / 100;
    format!(
        "[{}{}] {percent:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::{AppServices, View};
    use study_core::model::WeekNumber;
    use study_core::time::fixed_clock;

    #[test]
    fn progress_bar_scales() {
        assert_eq!(progress_bar(0), format!("[{}]   0%", "-".repeat(BAR_WIDTH)));
        assert_eq!(progress_bar(100), format!("[{}] 100%", "#".repeat(BAR_WIDTH)));
        assert!(progress_bar(50).starts_with(&format!("[{}-", "#".repeat(14))));
    }

    #[tokio::test]
    async fn dashboard_mentions_week_and_month() {
        let mut session = AppServices::in_memory(fixed_clock()).open_session().await;
        session.toggle_task(&"week1-light-0".parse().unwrap());

        let text = render(&session.render());
        assert!(text.starts_with("Week 1 of 16\n"));
        assert!(text.contains("Month 1 (Jan): Foundation & Accuracy"));
        assert!(text.contains("1 of 7 days completed this week"));
        assert!(text.contains("is a light day of plan week 2"));
    }

    #[tokio::test]
    async fn schedule_lists_checkboxes() {
        let mut session = AppServices::in_memory(fixed_clock()).open_session().await;
        session.toggle_task(&"week1-heavy-2".parse().unwrap());
        session.select_view(View::HeavyDays);

        let text = render(&session.render());
        assert!(text.starts_with("Week 1 heavy days: Sat, Sun, Mon\n"));
        assert!(text.contains("[x] week1-heavy-2"));
        assert!(text.contains("[ ] week1-heavy-0"));
        assert_eq!(text.matches("[ ]").count(), 3);
        assert!(text.contains("1 of 4 done"));
    }

    #[tokio::test]
    async fn roadmap_marks_current_month() {
        let mut session = AppServices::in_memory(fixed_clock()).open_session().await;
        session.change_week(WeekNumber::new(6).unwrap());

        let text = roadmap(&session.roadmap());
        assert!(text.contains("> 2. Month 2 (Feb): Lexical Resource & Structure"));
        assert_eq!(text.matches("> ").count(), 1);
    }
}
