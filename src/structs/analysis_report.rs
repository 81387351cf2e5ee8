use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::structs::report_details::ReportDetails;
use crate::structs::report_summary::ReportSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,
    pub details: ReportDetails,
    /// Tools that could not be run, keyed like `details`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}
