pub mod analysis_config;
#[allow(clippy::module_inception)]
pub mod config;
pub mod scoring_config;
pub mod server_config;
pub mod tool_config;
pub mod tools_config;
