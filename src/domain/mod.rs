pub mod phase_profile;
pub mod spending_plan;
