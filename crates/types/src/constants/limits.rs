//! Global limits and defaults for configuration and runtime

/// Minimum allowed per-item estimation timeout in milliseconds
pub const MIN_ESTIMATE_TIMEOUT_MS: u64 = 100; // 100ms

/// Maximum allowed per-item estimation timeout in milliseconds
pub const MAX_ESTIMATE_TIMEOUT_MS: u64 = 30_000; // 30s

/// Default per-item estimation timeout in milliseconds
pub const DEFAULT_ESTIMATE_TIMEOUT_MS: u64 = 2_000; // 2s

/// Default global aggregation timeout in milliseconds
pub const DEFAULT_GLOBAL_TIMEOUT_MS: u64 = 4_000; // 4s

/// Maximum number of line-items accepted in one invoice request
pub const MAX_LINE_ITEMS: usize = 100;

/// Default invoice validity window in days
pub const DEFAULT_VALIDITY_DAYS: i64 = 30;

/// Default invoice total above which manual review is required, in USD
pub const DEFAULT_MANUAL_REVIEW_THRESHOLD: f64 = 25_000.0;
