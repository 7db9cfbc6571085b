//! Full-screen TUI implementation for signon.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod messages;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{banner, form};
pub use runtime::Runtime;
use signon_core::config::Config;
use signon_core::form::FormAction;

/// Runs one interactive form session.
///
/// Returns the resolved redirect URL when the submission succeeded, `None`
/// when the user quit the form without logging in.
pub async fn run_form(config: &Config, action: FormAction) -> Result<Option<String>> {
    // The form requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!("signon requires a terminal to render the form.");
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "{} at {}", action.title, config.base_url)?;
    err.flush()?;

    let mut runtime = Runtime::new(config, action)?;
    runtime.run()?;

    Ok(runtime.state.outcome.take())
}
