//! Centralized default constants for the aperture gateway.
//!
//! **This module is the single source of truth** for shared default values.
//! All crates reference these constants instead of defining their own magic
//! numbers.

// =============================================================================
// RETRIEVAL
// =============================================================================

/// Default number of assets returned by a retrieval when the caller does
/// not specify a limit.
pub const DEFAULT_LIMIT: u32 = 60;

/// Hard cap on the number of assets a single retrieval may request.
/// Matches the provider's max_results ceiling.
pub const MAX_LIMIT: u32 = 200;

/// Maximum number of search expression variants issued per retrieval.
/// Keeps worst-case cascade latency bounded at variants × CALL_TIMEOUT_SECS.
pub const MAX_SEARCH_VARIANTS: usize = 3;

// =============================================================================
// TIMEOUTS
// =============================================================================

/// Per-call timeout for search and listing requests (seconds).
pub const CALL_TIMEOUT_SECS: u64 = 10;

/// Timeout for the provider ping diagnostic (seconds).
pub const PING_TIMEOUT_SECS: u64 = 6;

/// Timeout for the top-level group listing (seconds).
pub const GROUPS_TIMEOUT_SECS: u64 = 8;

/// Outer response deadline at the HTTP boundary (seconds). Requests that
/// run past this return a well-formed 504 envelope instead of hanging.
pub const RESPONSE_DEADLINE_SECS: u64 = 15;

// =============================================================================
// SERVER
// =============================================================================

/// Default bind host for the API server.
pub const BIND_HOST: &str = "0.0.0.0";

/// Default bind port for the API server.
pub const BIND_PORT: u16 = 5001;
