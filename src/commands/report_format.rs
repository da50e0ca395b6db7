use crate::domain::phase_profile::ProfileTable;
use crate::domain::spending_plan::{MonthRecord, PhaseSummary, SpendingPlan};
use crate::services::currency_format::format_euro;

pub fn format_plan_report(plan: &SpendingPlan) -> String {
    let mut lines = Vec::new();
    lines.push("Spending Plan".to_string());
    lines.push(format!("Duration: {} months", plan.duration));
    lines.push(format!("Total budget: {}", format_euro(plan.total_budget)));
    lines.push(format!("Profile: {}", plan.profile));
    lines.push(String::new());
    lines.push("Monthly detail:".to_string());
    lines.push("Month | Progressive | Phase | % Phase | % Phase per month | Expected cost".to_string());
    lines.push("------|-------------|-------|---------|-------------------|--------------".to_string());
    lines.extend(plan.months.iter().map(format_month_row));
    lines.push(String::new());
    lines.push("Phase summary:".to_string());
    lines.push("Phase | Months | % Phase | % Phase per month | Phase total".to_string());
    lines.push("------|--------|---------|-------------------|------------".to_string());
    lines.extend(plan.phases.iter().map(format_phase_row));

    lines.join("\n")
}

fn format_month_row(month: &MonthRecord) -> String {
    format!(
        "{label} | {progressive} | {phase} | {percent} | {per_month:.2} | {cost}",
        label = month.label(),
        progressive = month.progressive_month,
        phase = month.phase,
        percent = month.phase_percent,
        per_month = month.phase_percent_per_month,
        cost = format_euro(month.amount)
    )
}

fn format_phase_row(phase: &PhaseSummary) -> String {
    format!(
        "{phase} | {months} | {percent} | {per_month:.2} | {total}",
        phase = phase.phase,
        months = phase.month_count,
        percent = phase.phase_percent,
        per_month = phase.phase_percent_per_month,
        total = format_euro(phase.total)
    )
}

pub fn format_profile_table(table: &ProfileTable) -> String {
    let mut lines = Vec::new();
    lines.push("Profile | Phase 1 | Phase 2 | Phase 3 | Phase 4 | Phase 5".to_string());
    lines.push("--------|---------|---------|---------|---------|--------".to_string());
    for (kind, weights) in table.iter() {
        let cells: Vec<String> = weights
            .as_slice()
            .iter()
            .map(|weight| format!("{weight}%"))
            .collect();
        lines.push(format!("{kind} | {}", cells.join(" | ")));
    }
    lines.join("\n")
}
