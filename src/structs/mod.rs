pub mod analysis_report;
pub mod analysis_request;
pub mod cli;
pub mod config;
pub mod diagnostic_text;
pub mod report_details;
pub mod report_summary;
