pub mod external_tool;
pub mod quality_scorer;
pub mod report_service;
