//! Vote and decision value types.

use serde::{Deserialize, Serialize};

/// A single voter's verdict on one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Grant,
    Deny,
    /// The voter has no opinion on this request; abstentions are excluded
    /// from the consensus tally.
    Abstain,
}

/// The aggregated outcome of a decision mechanism. Never abstains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Grant,
    Deny,
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Decision::Grant)
    }
}
