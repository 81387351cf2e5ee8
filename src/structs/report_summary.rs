use serde::{Deserialize, Serialize};
use crate::enums::verdict::Verdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub quality_score: u32,
    pub total_issues: u32,
    pub verdict: Verdict,
}
