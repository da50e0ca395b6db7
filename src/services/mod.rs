pub mod allocator;
pub mod currency_format;
pub mod plan_export_yaml;
pub mod plan_plot;
pub mod plan_request_yaml;
pub mod profile_yaml;
