pub mod analysis_server;
pub mod handlers;
pub mod json_body;
