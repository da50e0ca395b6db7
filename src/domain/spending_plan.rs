use rust_decimal::Decimal;

use crate::domain::phase_profile::ProfileKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub start_month: u32,
    pub end_month: u32,
    pub total_budget: Decimal,
    pub profile: ProfileKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRecord {
    pub month: u32,
    pub progressive_month: u32,
    pub phase: usize,
    pub phase_percent: u32,
    pub phase_percent_per_month: Decimal,
    pub amount: Decimal,
}

impl MonthRecord {
    /// Absolute month label, zero-padded to two digits.
    pub fn label(&self) -> String {
        format!("{:02}", self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhaseSummary {
    pub phase: usize,
    pub month_count: u32,
    pub phase_percent: u32,
    pub phase_percent_per_month: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingPlan {
    pub months: Vec<MonthRecord>,
    pub phases: Vec<PhaseSummary>,
    pub duration: u32,
    /// Requested total rounded to cents; every amount in the plan sums to it.
    pub total_budget: Decimal,
    pub profile: ProfileKind,
}

impl SpendingPlan {
    pub fn months_in_phase(&self, phase: usize) -> impl Iterator<Item = &MonthRecord> {
        self.months.iter().filter(move |month| month.phase == phase)
    }

    pub fn allocated_total(&self) -> Decimal {
        self.months.iter().map(|month| month.amount).sum()
    }
}
