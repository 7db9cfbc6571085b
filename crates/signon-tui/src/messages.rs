//! Literal user-facing message strings.

/// Banner text for the missing-credential guard.
pub const FILL_IN_ALL_FIELDS: &str = "Fill in all fields";

/// Default banner text when the server rejects a login without a message.
pub const LOGIN_FAILED: &str = "Login failed";

/// Banner text for transport-level failures.
pub const SERVER_ERROR: &str = "Server error. Try again later.";
