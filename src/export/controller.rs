//! Submit half of the export wizard.
//!
//! TRADE-OFFS
//! ==========
//! The request is fire-and-forget from the state machine's point of view:
//! whether the remote accepts or rejects, the session resets after a fixed
//! delay so the completion indicator stays visible for a moment before the
//! wizard clears. Failures are handed to the notification collaborator,
//! never retried. Validation failures are different — nothing is sent and
//! the session stays open for correction.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use std::time::Duration;

use crate::export::{ExportError, ExportSession};
use crate::net::AdminApi;
use crate::notify::Notifier;

/// How long the completion indicator stays before the session clears.
pub const RESET_DELAY: Duration = Duration::from_millis(1000);

/// Validate, submit, notify, and reset after `reset_delay`.
///
/// # Errors
///
/// [`ExportError::NotReady`]/[`ExportError::InvalidRange`] before anything
/// is sent (session untouched), [`ExportError::Api`] after a rejected
/// request (session reset regardless).
pub async fn run_export<A: AdminApi, N: Notifier>(
    api: &A,
    notify: &N,
    session: &mut ExportSession,
    reset_delay: Duration,
) -> Result<Vec<u8>, ExportError> {
    let request = match session.export_request() {
        Ok(request) => request,
        Err(e) => {
            notify.error(&e.to_string());
            return Err(e);
        }
    };

    let result = api.export_filtered(&request).await;
    match &result {
        Ok(_) => notify.success("Export ready"),
        Err(e) => notify.error(&e.to_string()),
    }

    tokio::time::sleep(reset_delay).await;
    session.reset();
    result.map_err(ExportError::from)
}
