//! Banner feature slice.

mod state;

pub use state::{AUTO_HIDE, BannerState};
