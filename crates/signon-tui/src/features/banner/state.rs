//! Banner slice state.
//!
//! The banner is the single reusable inline error element: showing it again
//! replaces the text, and each show schedules an independent auto-hide delay
//! in the runtime. An elapsed delay hides whatever is shown at that moment,
//! even when a newer error replaced the text in between.

use std::time::Duration;

/// Fixed delay after which a shown banner is hidden.
pub const AUTO_HIDE: Duration = Duration::from_millis(5000);

#[derive(Debug, Default)]
pub struct BannerState {
    message: Option<String>,
}

impl BannerState {
    /// Shows the banner with `text`, replacing any current message.
    pub fn show(&mut self, text: &str) {
        self.message = Some(text.to_string());
    }

    /// Hides the banner unconditionally.
    pub fn hide(&mut self) {
        self.message = None;
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_shown(&self) -> bool {
        self.message.is_some()
    }
}
