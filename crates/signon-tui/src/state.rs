//! Application state composition.
//!
//! This module defines the top-level state for the TUI:
//!
//! ```text
//! AppState
//! ├── form: FormState       (tracked fields, focus, busy submit control)
//! ├── banner: BannerState   (reusable inline error element)
//! ├── tasks: Tasks          (async task lifecycle state)
//! └── outcome               (resolved redirect once login succeeded)
//! ```
//!
//! State is only mutated by the reducer in `update`; the runtime executes the
//! effects the reducer returns.

use std::sync::Arc;

use signon_core::client::AuthClient;
use signon_core::form::{FormAction, credential_fields};

use crate::banner::BannerState;
use crate::common::{TaskSeq, Tasks};
use crate::form::FormState;

/// Application state for the form TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Form state (fields, focus, busy submit control).
    pub form: FormState,
    /// Inline error banner state.
    pub banner: BannerState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Spinner animation frame counter (while a request is pending).
    pub spinner_frame: usize,
    /// Client used to resolve redirects (the runtime clones it into
    /// spawned submit handlers).
    pub client: Arc<AuthClient>,
    /// Open the redirect with the system opener on success.
    pub open_redirect: bool,
    /// Resolved redirect URL once a submission succeeded.
    pub outcome: Option<String>,
}

impl AppState {
    /// Creates the state for one form session.
    pub fn new(action: FormAction, client: Arc<AuthClient>, open_redirect: bool) -> Self {
        Self {
            should_quit: false,
            form: FormState::new(action, credential_fields()),
            banner: BannerState::default(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            spinner_frame: 0,
            client,
            open_redirect,
            outcome: None,
        }
    }
}
