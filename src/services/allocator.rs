use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::domain::phase_profile::{PHASE_COUNT, PhaseWeights, ProfileError, ProfileTable};
use crate::domain::spending_plan::{MonthRecord, PhaseSummary, PlanRequest, SpendingPlan};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    #[error("duration must be at least {min} periods (got {duration})", min = PHASE_COUNT)]
    InvalidDuration { duration: i64 },
    #[error("total budget must not be negative (got {0})")]
    NegativeBudget(Decimal),
    #[error(transparent)]
    Profile(#[from] ProfileError),
}

/// Rounds to cents, halves away from zero.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Splits `request.total_budget` over the five phases of `request.profile` and
/// then uniformly over the months of each phase.
///
/// Phase 5 takes whatever phases 1-4 leave after rounding, and the last month
/// of every phase takes whatever its siblings leave, so all amounts add up to
/// the rounded total exactly.
pub fn build_plan(request: &PlanRequest, table: &ProfileTable) -> Result<SpendingPlan, PlanError> {
    let duration = i64::from(request.end_month) - i64::from(request.start_month) + 1;
    if duration < PHASE_COUNT as i64 {
        return Err(PlanError::InvalidDuration { duration });
    }
    if request.total_budget < Decimal::ZERO {
        return Err(PlanError::NegativeBudget(request.total_budget));
    }
    let weights = table.weights(request.profile)?;
    let duration = duration as u32;
    tracing::debug!(
        duration,
        profile = %request.profile,
        total_budget = %request.total_budget,
        "building spending plan"
    );

    let phases = assign_phases(duration);
    let mut month_counts = [0u32; PHASE_COUNT];
    for phase in &phases {
        month_counts[phase - 1] += 1;
    }

    let total_budget = round_cents(request.total_budget);
    let phase_totals = phase_totals(total_budget, weights);

    let mut months = Vec::with_capacity(phases.len());
    let mut seen_in_phase = [0u32; PHASE_COUNT];
    for (index, phase) in phases.iter().copied().enumerate() {
        let count = month_counts[phase - 1];
        let base_share = round_cents(phase_totals[phase - 1] / Decimal::from(count));
        seen_in_phase[phase - 1] += 1;
        let amount = if seen_in_phase[phase - 1] < count {
            base_share
        } else {
            phase_totals[phase - 1] - base_share * Decimal::from(count - 1)
        };

        let progressive_month = index as u32 + 1;
        months.push(MonthRecord {
            month: request.start_month + progressive_month - 1,
            progressive_month,
            phase,
            phase_percent: weights.weight(phase),
            phase_percent_per_month: percent_per_month(weights.weight(phase), count),
            amount,
        });
    }

    let phases = (1..=PHASE_COUNT)
        .map(|phase| PhaseSummary {
            phase,
            month_count: month_counts[phase - 1],
            phase_percent: weights.weight(phase),
            phase_percent_per_month: percent_per_month(
                weights.weight(phase),
                month_counts[phase - 1],
            ),
            total: phase_totals[phase - 1],
        })
        .collect();

    Ok(SpendingPlan {
        months,
        phases,
        duration,
        total_budget,
        profile: request.profile,
    })
}

/// Phase of every progressive month, `floor((m - 1) / (duration / 5)) + 1`.
///
/// Evaluated as `(m - 1) * 5 / duration` in integers, which gives the same
/// block boundaries as the real-valued division without float error.
pub fn assign_phases(duration: u32) -> Vec<usize> {
    let duration = u64::from(duration);
    (0..duration)
        .map(|offset| {
            let phase = (offset * PHASE_COUNT as u64 / duration) as usize + 1;
            phase.min(PHASE_COUNT)
        })
        .collect()
}

fn phase_totals(total_budget: Decimal, weights: &PhaseWeights) -> [Decimal; PHASE_COUNT] {
    let mut totals = [Decimal::ZERO; PHASE_COUNT];
    let mut accumulated = Decimal::ZERO;
    for phase in 1..PHASE_COUNT {
        let share =
            round_cents(total_budget * Decimal::from(weights.weight(phase)) / Decimal::ONE_HUNDRED);
        tracing::trace!(phase, %share, "phase total");
        totals[phase - 1] = share;
        accumulated += share;
    }
    totals[PHASE_COUNT - 1] = total_budget - accumulated;
    tracing::trace!(phase = PHASE_COUNT, share = %totals[PHASE_COUNT - 1], "phase total (remainder)");
    totals
}

fn percent_per_month(weight: u32, count: u32) -> Decimal {
    round_cents(Decimal::from(weight) / Decimal::from(count))
}
