//! UI event types.
//!
//! This module defines the unified event enum for the TUI. All external
//! inputs (terminal, async results) are converted to `UiEvent` before being
//! processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send events directly to the runtime's event inbox;
//! results arrive as separate events. The submit request additionally uses a
//! uniform task lifecycle: the runtime emits `TaskStarted` once the request
//! task is spawned and `TaskCompleted` wrapping the result event when it
//! resolves, and only the reducer mutates `TaskState`. There is no
//! cancellation: an in-flight request cannot be aborted.

use crossterm::event::Event as CrosstermEvent;
use signon_core::client::LoginResponse;

use crate::common::{TaskCompleted, TaskKind, TaskStarted};

/// Unified event enum for the TUI.
///
/// All inputs to the TUI are converted to this type before processing.
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (for the pending spinner).
    Tick,

    /// Terminal input event (key, resize).
    Terminal(CrosstermEvent),

    /// Async form submission completed. `Err` carries the rendered
    /// transport/decoding error; a server rejection is an `Ok` response
    /// with `success: false`.
    LoginResult {
        result: Result<LoginResponse, String>,
    },

    /// The banner auto-hide delay elapsed. Hides the banner regardless of
    /// whether a newer error replaced the text in the meantime.
    BannerTimeout,

    /// Task lifecycle: runtime started a task.
    TaskStarted {
        kind: TaskKind,
        started: TaskStarted,
    },

    /// Task lifecycle: runtime completed a task (wraps the result event).
    TaskCompleted {
        kind: TaskKind,
        completed: TaskCompleted<Box<UiEvent>>,
    },
}
