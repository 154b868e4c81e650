// LogTriage - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogTriage";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Classification limits
// =============================================================================

/// Maximum number of candidate error lines returned per analysis.
/// Keeps response bodies small even for very noisy logs; the first
/// occurrences carry the failure evidence.
pub const MAX_ERROR_LINES: usize = 25;

/// Keywords that mark a line as a candidate error line.
/// Matched as case-insensitive substrings against each trimmed line.
pub const ERROR_LINE_KEYWORDS: &[&str] = &[
    "error",
    "exception",
    "traceback",
    "failed",
    "failure",
    "caused by",
    "exit code",
];

// =============================================================================
// Server defaults
// =============================================================================

/// Default socket address the HTTP server binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Maximum accepted request body size in bytes. Pasted log excerpts fit
/// comfortably; anything larger is rejected before it reaches a handler
/// so a single request cannot hold arbitrary amounts of memory.
pub const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024; // 1 MiB

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
