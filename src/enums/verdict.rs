use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "Good Quality")]
    GoodQuality,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Verdict {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GoodQuality => "Good Quality",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
