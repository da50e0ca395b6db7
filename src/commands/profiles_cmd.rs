use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_profile_table;
use crate::services::profile_yaml::{ProfileYamlError, load_profile_table_if_provided};

pub fn profiles_command(cmd: Commands) -> Result<(), ProfileYamlError> {
    if let Commands::Profiles { profiles } = cmd {
        let table = load_profile_table_if_provided(profiles.as_deref())?;
        println!("{}", format_profile_table(&table));
    }
    Ok(())
}
