//! Default values for [`crate::config`].

pub const MAX_CONNECTIONS: u32 = 5;
pub const ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Pre-ping. Listed for completeness; pool construction forces this on
/// regardless of configuration.
pub const TEST_BEFORE_ACQUIRE: bool = true;
