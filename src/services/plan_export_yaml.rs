use std::io::{self, Write};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::phase_profile::ProfileKind;
use crate::domain::spending_plan::SpendingPlan;

#[derive(Serialize)]
struct PlanExportRecord {
    generated_on: NaiveDate,
    profile: ProfileKind,
    duration: u32,
    #[serde(with = "rust_decimal::serde::float")]
    total_budget: Decimal,
    monthly_detail: Vec<MonthRow>,
    phase_summary: Vec<PhaseRow>,
}

// Field order is the column order of the exported tables.
#[derive(Serialize)]
struct MonthRow {
    month: String,
    progressive_month: u32,
    phase: usize,
    phase_percent: u32,
    #[serde(with = "rust_decimal::serde::float")]
    phase_percent_per_month: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    expected_cost: Decimal,
}

#[derive(Serialize)]
struct PhaseRow {
    phase: usize,
    month_count: u32,
    phase_percent: u32,
    #[serde(with = "rust_decimal::serde::float")]
    phase_percent_per_month: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    phase_total: Decimal,
}

/// Writes the plan as a two-section YAML document, `monthly_detail` and
/// `phase_summary`, with plain numeric values.
pub fn serialize_plan_to_yaml<W: Write>(
    writer: &mut W,
    plan: &SpendingPlan,
    generated_on: NaiveDate,
) -> io::Result<()> {
    let record = PlanExportRecord {
        generated_on,
        profile: plan.profile,
        duration: plan.duration,
        total_budget: plan.total_budget,
        monthly_detail: plan
            .months
            .iter()
            .map(|month| MonthRow {
                month: month.label(),
                progressive_month: month.progressive_month,
                phase: month.phase,
                phase_percent: month.phase_percent,
                phase_percent_per_month: month.phase_percent_per_month,
                expected_cost: month.amount,
            })
            .collect(),
        phase_summary: plan
            .phases
            .iter()
            .map(|phase| PhaseRow {
                phase: phase.phase,
                month_count: phase.month_count,
                phase_percent: phase.phase_percent,
                phase_percent_per_month: phase.phase_percent_per_month,
                phase_total: phase.total,
            })
            .collect(),
    };

    let yaml = serde_yaml::to_string(&record).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
