//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O and task spawning only (no direct UI mutations). This
//! keeps the reducer pure: it only mutates state and returns effects, never
//! performs I/O or spawns tasks directly.

use signon_core::client::LoginRequest;

use crate::common::TaskId;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Spawn the async form submission with the given credential payload.
    SubmitForm {
        task: Option<TaskId>,
        request: LoginRequest,
    },

    /// Start the banner auto-hide delay. Each banner show schedules its own
    /// delay; delays are never reset or cancelled.
    ScheduleBannerHide,

    /// Open the resolved redirect with the system opener.
    OpenRedirect { url: String },
}
