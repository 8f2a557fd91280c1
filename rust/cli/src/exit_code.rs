//! Exit code constants for the CLI application.

/// Success exit code (standard Unix convention).
pub const SUCCESS: i32 = 0;

/// General error exit code: bad arguments, unreadable input, rejected hands.
pub const ERROR: i32 = 2;
