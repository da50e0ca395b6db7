use chrono::Local;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_plan_report;
use crate::domain::phase_profile::ProfileKind;
use crate::domain::spending_plan::PlanRequest;
use crate::services::allocator::{PlanError, build_plan};
use crate::services::plan_export_yaml::serialize_plan_to_yaml;
use crate::services::plan_plot::{PlanPlotError, write_plan_charts};
use crate::services::plan_request_yaml::{PlanRequestYamlError, load_plan_request_from_yaml_file};
use crate::services::profile_yaml::{ProfileYamlError, load_profile_table_if_provided};

#[derive(Error, Debug)]
pub enum PlanCommandError {
    #[error("failed to load plan request: {0}")]
    Request(#[from] PlanRequestYamlError),
    #[error("failed to load profile table: {0}")]
    Profiles(#[from] ProfileYamlError),
    #[error("missing plan argument: {0}")]
    MissingArgument(&'static str),
    #[error("{0}")]
    Plan(#[from] PlanError),
    #[error("failed to write plan export {path}: {source}")]
    Export {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write plan charts: {0}")]
    Charts(#[from] PlanPlotError),
}

pub fn plan_command(cmd: Commands) -> Result<(), PlanCommandError> {
    if let Commands::Plan {
        start_month,
        end_month,
        total_budget,
        profile,
        input,
        profiles,
        output,
        charts,
    } = cmd
    {
        let request = match input {
            Some(path) => load_plan_request_from_yaml_file(&path)?,
            None => request_from_flags(start_month, end_month, total_budget, profile)?,
        };
        let table = load_profile_table_if_provided(profiles.as_deref())?;
        let plan = build_plan(&request, &table)?;
        tracing::info!(
            duration = plan.duration,
            profile = %plan.profile,
            "spending plan built"
        );

        println!("{}", format_plan_report(&plan));

        if let Some(output) = output {
            let mut buffer = Vec::new();
            serialize_plan_to_yaml(&mut buffer, &plan, Local::now().date_naive())
                .and_then(|()| std::fs::write(&output, buffer))
                .map_err(|source| PlanCommandError::Export {
                    path: output.clone(),
                    source,
                })?;
            println!("Spending plan written to {output}");

            if charts {
                let phase_chart_path = format!("{output}.phases.png");
                let monthly_chart_path = format!("{output}.monthly.png");
                write_plan_charts(&plan, &phase_chart_path, &monthly_chart_path)?;
                println!("Phase chart written to {phase_chart_path}");
                println!("Monthly chart written to {monthly_chart_path}");
            }
        }
    }
    Ok(())
}

fn request_from_flags(
    start_month: Option<u32>,
    end_month: Option<u32>,
    total_budget: Option<Decimal>,
    profile: Option<ProfileKind>,
) -> Result<PlanRequest, PlanCommandError> {
    Ok(PlanRequest {
        start_month: start_month.ok_or(PlanCommandError::MissingArgument("start-month"))?,
        end_month: end_month.ok_or(PlanCommandError::MissingArgument("end-month"))?,
        total_budget: total_budget.ok_or(PlanCommandError::MissingArgument("total-budget"))?,
        profile: profile.unwrap_or(ProfileKind::Linear),
    })
}
