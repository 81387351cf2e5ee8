use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub code: String,
}

impl AnalysisRequest {
    pub fn has_code(&self) -> bool {
        !self.code.trim().is_empty()
    }
}
