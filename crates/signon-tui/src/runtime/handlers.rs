//! Effect handler implementations.
//!
//! Handlers are pure async functions that return the result `UiEvent`;
//! the runtime spawns them and sends the result to the inbox.

use std::sync::Arc;

use signon_core::client::{AuthClient, LoginRequest};

use crate::banner;
use crate::events::UiEvent;

/// Submits the credential form to the action path.
///
/// A server rejection is an `Ok` response; only transport-level failures
/// become the event's `Err`, rendered to a string the way the reducer
/// expects it.
pub async fn submit_form(
    client: Arc<AuthClient>,
    action_path: String,
    request: LoginRequest,
) -> UiEvent {
    let result = match client.submit(&action_path, &request).await {
        Ok(response) => {
            tracing::debug!(success = response.success, "form submission resolved");
            Ok(response)
        }
        Err(err) => {
            tracing::warn!(error = %err, path = %action_path, "form submission failed");
            Err(err.to_string())
        }
    };
    UiEvent::LoginResult { result }
}

/// Waits out the banner auto-hide delay.
pub async fn banner_hide_delay() -> UiEvent {
    tokio::time::sleep(banner::AUTO_HIDE).await;
    UiEvent::BannerTimeout
}
