use std::io;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::phase_profile::ProfileKind;
use crate::domain::spending_plan::PlanRequest;

#[derive(Error, Debug)]
pub enum PlanRequestYamlError {
    #[error("failed to read plan request: {0}")]
    Read(#[from] io::Error),
    #[error("failed to parse plan request yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("start_month must be a positive month number")]
    InvalidStartMonth,
}

#[derive(Debug, Deserialize)]
struct PlanRequestRecord {
    start_month: u32,
    end_month: u32,
    total_budget: Decimal,
    #[serde(default = "default_profile")]
    profile: ProfileKind,
}

fn default_profile() -> ProfileKind {
    ProfileKind::Linear
}

pub fn load_plan_request_from_yaml_file(path: &str) -> Result<PlanRequest, PlanRequestYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_plan_request_from_yaml_str(&contents)
}

pub fn deserialize_plan_request_from_yaml_str(
    input: &str,
) -> Result<PlanRequest, PlanRequestYamlError> {
    let record: PlanRequestRecord = serde_yaml::from_str(input)?;
    if record.start_month == 0 {
        return Err(PlanRequestYamlError::InvalidStartMonth);
    }
    Ok(PlanRequest {
        start_month: record.start_month,
        end_month: record.end_month,
        total_budget: record.total_budget,
        profile: record.profile,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_request_with_string_total() {
        let request = deserialize_plan_request_from_yaml_str(
            "start_month: 2\nend_month: 14\ntotal_budget: \"10000.50\"\nprofile: back-loaded\n",
        )
        .unwrap();

        assert_eq!(request.start_month, 2);
        assert_eq!(request.end_month, 14);
        assert_eq!(request.total_budget, dec!(10000.50));
        assert_eq!(request.profile, ProfileKind::BackLoaded);
    }

    #[test]
    fn parses_numeric_total_and_defaults_profile() {
        let request =
            deserialize_plan_request_from_yaml_str("start_month: 1\nend_month: 5\ntotal_budget: 1000\n")
                .unwrap();

        assert_eq!(request.total_budget, dec!(1000));
        assert_eq!(request.profile, ProfileKind::Linear);
    }

    #[test]
    fn rejects_unknown_profile() {
        let error = deserialize_plan_request_from_yaml_str(
            "start_month: 1\nend_month: 5\ntotal_budget: 1000\nprofile: zigzag\n",
        )
        .unwrap_err();
        assert!(matches!(error, PlanRequestYamlError::Parse(_)));
    }

    #[test]
    fn rejects_month_zero() {
        let error = deserialize_plan_request_from_yaml_str(
            "start_month: 0\nend_month: 5\ntotal_budget: 1000\n",
        )
        .unwrap_err();
        assert!(matches!(error, PlanRequestYamlError::InvalidStartMonth));
    }
}
