use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of evaluating one resource against one check.
///
/// `Skipped` marks a resource the check deliberately did not inspect. Hosts that only
/// know pass/fail can treat it as `Passed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Passed,
    Failed,
    Skipped,
}

impl Verdict {
    /// Two-valued view used by hosts without a skip state.
    pub fn collapse_skipped(self) -> Self {
        match self {
            Verdict::Skipped => Verdict::Passed,
            other => other,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Passed => "PASSED",
            Verdict::Failed => "FAILED",
            Verdict::Skipped => "SKIPPED",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a check is registered under.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CheckCategory {
    General,
    Convention,
    Iam,
    Logging,
    Networking,
    Encryption,
}
