//! Structured logging field name constants for the aperture gateway.
//!
//! All crates use these constants for consistent structured logging fields,
//! so log aggregation tools can query by standardized field names across
//! every subsystem.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Degraded service, requires operator attention |
//! | WARN  | Recoverable issue, automatic fallback applied |
//! | INFO  | Lifecycle events (startup, shutdown), operation completions |
//! | DEBUG | Decision points, intermediate values, config choices |

/// Subsystem originating the log event.
/// Values: "api", "provider", "gateway"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "cloudinary", "cascade", "normalize"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "retrieve", "search", "list", "ping"
pub const OPERATION: &str = "op";

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of normalized records returned by a retrieval.
pub const RESULT_COUNT: &str = "result_count";

/// Strategy that served a retrieval ("searchPrimary", "searchAlternate",
/// "listingFallback").
pub const STRATEGY: &str = "strategy";

/// Search expression issued to the provider.
pub const EXPRESSION: &str = "expression";

/// Category (group) scoping a retrieval.
pub const CATEGORY: &str = "category";

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
