//! Standard exit codes (BSD sysexits.h compatible)

/// Successful termination, whatever way the exploration ended
pub const OK: i32 = 0;

/// Internal software error (e.g. the mansion could not be built)
pub const SOFTWARE: i32 = 70;

/// Input/output error
pub const IOERR: i32 = 74;

/// Configuration error
pub const CONFIG: i32 = 78;
