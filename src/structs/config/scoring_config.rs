use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct ScoringConfig {
    #[serde(default = "ConfigHelper::default_base_score")]
    pub base_score: u32,

    #[serde(default = "ConfigHelper::default_issue_penalty")]
    pub issue_penalty: u32,

    #[serde(default = "ConfigHelper::default_score_floor")]
    pub score_floor: u32,

    #[serde(default = "ConfigHelper::default_good_quality_threshold")]
    pub good_quality_threshold: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: ConfigHelper::default_base_score(),
            issue_penalty: ConfigHelper::default_issue_penalty(),
            score_floor: ConfigHelper::default_score_floor(),
            good_quality_threshold: ConfigHelper::default_good_quality_threshold(),
        }
    }
}
