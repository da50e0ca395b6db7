use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use spendplan::commands::base_commands::{CliArgs, Commands};
use spendplan::commands::plan_cmd::plan_command;
use spendplan::commands::profiles_cmd::profiles_command;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::Plan { .. } => plan_command(cmd).map_err(|e| e.to_string()),
        cmd @ Commands::Profiles { .. } => profiles_command(cmd).map_err(|e| e.to_string()),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::debug!(%message, "command failed");
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}
