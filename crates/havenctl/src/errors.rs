//! Exit status for havenctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code when the backend rejected the call or was unreachable
pub const EXIT_REQUEST_FAILED: i32 = 1;

/// Exit code for bad configuration
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Exit code when interrupted before the call settled (128 + SIGINT)
pub const EXIT_CANCELLED: i32 = 130;
