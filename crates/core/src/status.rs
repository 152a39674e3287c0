//! Accept/reject outcome relayed to the rollup server.

use serde::{Deserialize, Serialize};

/// Outcome of handling one rollup request.
///
/// Exactly one value is live at any time: the polling loop owns it,
/// reports it with each finish-post, and overwrites it with the result
/// of the next dispatched request.  The initial value is [`Accept`](Self::Accept).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishStatus {
    /// The request was handled; the state transition stands.
    #[default]
    Accept,
    /// The request could not be handled; the transition is rejected.
    Reject,
}

impl FinishStatus {
    /// Wire representation, as sent in the finish-post body.
    pub fn as_str(self) -> &'static str {
        match self {
            FinishStatus::Accept => "accept",
            FinishStatus::Reject => "reject",
        }
    }
}
