//! Stable exit codes for gateway CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid invocation, unreadable configuration or other process errors.
pub const INVALID: i32 = 1;
/// The gateway answered with an error response.
pub const REQUEST_FAILED: i32 = 2;
