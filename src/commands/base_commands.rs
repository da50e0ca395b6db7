use clap::{Parser, Subcommand};
use clap_complete::Shell;
use rust_decimal::Decimal;

use crate::domain::phase_profile::ProfileKind;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Allocate a total budget over the five spending phases month by month
    Plan {
        /// First month of the plan (positive month number)
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..),
            required_unless_present = "input"
        )]
        start_month: Option<u32>,
        /// Last month of the plan, inclusive
        #[arg(short, long, required_unless_present = "input")]
        end_month: Option<u32>,
        /// Total budget to allocate, e.g. 10000.00
        #[arg(short, long, required_unless_present = "input")]
        total_budget: Option<Decimal>,
        /// Spending profile [default: linear]
        #[arg(short, long, value_enum, conflicts_with = "input")]
        profile: Option<ProfileKind>,
        /// Plan request YAML file, instead of the flags above
        #[arg(
            short,
            long,
            conflicts_with_all = ["start_month", "end_month", "total_budget"]
        )]
        input: Option<String>,
        /// Profile table YAML file overriding the built-in profiles
        #[arg(long)]
        profiles: Option<String>,
        /// Output YAML file with the monthly detail and phase summary
        #[arg(short, long)]
        output: Option<String>,
        /// Also render PNG charts next to the output file
        #[arg(long, requires = "output")]
        charts: bool,
    },
    /// Show the phase weights of every spending profile
    Profiles {
        /// Profile table YAML file overriding the built-in profiles
        #[arg(long)]
        profiles: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
