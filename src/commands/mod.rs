pub mod base_commands;
pub mod plan_cmd;
pub mod profiles_cmd;
pub mod report_format;
