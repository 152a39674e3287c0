//! The polling loop that drives the dapp.
//!
//! Each cycle posts the previous outcome to the server's `/finish`
//! endpoint.  A 202 means nothing is queued and the loop polls again
//! immediately -- there is deliberately no idle delay; the server
//! either blocks until work arrives or answers 202 straight away.  Any
//! returned request is dispatched synchronously and its outcome is
//! carried into the next cycle.  There is no terminal state.

use std::time::Duration;

use prism_core::status::FinishStatus;

use crate::handlers::Dispatcher;
use crate::rollup::{PollOutcome, RollupClient, RollupError};

/// Delay before re-polling after a transport or server error.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Run the polling loop indefinitely.
///
/// This function never returns under normal operation.  A failed
/// finish-post leaves the status unchanged and is retried after a
/// fixed delay.
pub async fn run(rollup: &RollupClient, dispatcher: &Dispatcher) {
    let mut status = FinishStatus::default();

    loop {
        status = match poll_once(rollup, dispatcher, status).await {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(error = %e, "Finish poll failed");
                tokio::time::sleep(RETRY_DELAY).await;
                status
            }
        };
    }
}

/// Drive one poll cycle: report `status`, then resolve whatever the
/// server hands back.
///
/// Returns the status to report on the next cycle: unchanged when the
/// server had nothing queued, otherwise the dispatched handler's
/// outcome.
pub async fn poll_once(
    rollup: &RollupClient,
    dispatcher: &Dispatcher,
    status: FinishStatus,
) -> Result<FinishStatus, RollupError> {
    tracing::debug!(status = status.as_str(), "Sending finish");

    match rollup.finish(status).await? {
        PollOutcome::Pending => {
            tracing::debug!("No pending rollup request");
            Ok(status)
        }
        PollOutcome::Request(request) => Ok(dispatcher.dispatch(&request).await),
    }
}
