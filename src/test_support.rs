use rust_decimal::Decimal;

use crate::domain::phase_profile::{PhaseWeights, ProfileKind, ProfileTable};
use crate::domain::spending_plan::{PlanRequest, SpendingPlan};
use crate::services::allocator::build_plan;

pub fn plan_request(start: u32, end: u32, total: Decimal, profile: ProfileKind) -> PlanRequest {
    PlanRequest {
        start_month: start,
        end_month: end,
        total_budget: total,
        profile,
    }
}

// A table holding one synthetic profile, so lookups of any other kind fail
pub fn single_profile_table(kind: ProfileKind, weights: &[u32]) -> ProfileTable {
    let mut table = ProfileTable::new();
    table.insert(kind, PhaseWeights::new(kind.name(), weights).unwrap());
    table
}

pub fn build_builtin_plan(start: u32, end: u32, total: Decimal, profile: ProfileKind) -> SpendingPlan {
    build_plan(
        &plan_request(start, end, total, profile),
        &ProfileTable::builtin(),
    )
    .unwrap()
}
