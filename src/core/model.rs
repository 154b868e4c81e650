// LogTriage - core/model.rs
//
// Core data model types. Pure data definitions with no I/O and no
// HTTP dependencies.
//
// These types are the shared vocabulary across all layers.

use serde::{Deserialize, Serialize};

// =============================================================================
// Log source
// =============================================================================

/// The coarse category assigned to a submitted log.
///
/// Doubles as the caller-supplied source hint: an `Unknown` hint carries
/// no signal, while a known hint resolves logs the detector could not
/// classify on its own. Wire values are lowercase ("python", "java",
/// "jenkins", "unknown").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogSource {
    Python,
    Java,
    Jenkins,
    #[default]
    Unknown,
}

impl LogSource {
    /// Returns all variants in detection priority order.
    pub fn all() -> &'static [LogSource] {
        &[
            LogSource::Python,
            LogSource::Java,
            LogSource::Jenkins,
            LogSource::Unknown,
        ]
    }

    /// Wire/display label (matches the serde representation).
    pub fn label(&self) -> &'static str {
        match self {
            LogSource::Python => "python",
            LogSource::Java => "java",
            LogSource::Jenkins => "jenkins",
            LogSource::Unknown => "unknown",
        }
    }

    /// True for every variant except `Unknown`.
    pub fn is_known(&self) -> bool {
        !matches!(self, LogSource::Unknown)
    }
}

impl std::fmt::Display for LogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Triage (classification result)
// =============================================================================

/// The complete result of analysing one submitted log.
///
/// Immutable once produced. The summary, cause, and fix strings are
/// canned per-category templates, so they borrow from static data; only
/// the extracted error lines are owned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Triage {
    /// Final detected source (after hint fallback, if any).
    pub source: LogSource,

    /// One-line description of what was detected.
    pub summary: &'static str,

    /// Most likely cause of the failure.
    pub likely_cause: &'static str,

    /// Ordered, fixed list of suggested remediation steps.
    pub suggested_fixes: &'static [&'static str],

    /// Fixed confidence score for the detected category, in [0, 1].
    pub confidence: f64,

    /// Candidate error lines surfaced from the log text: deduplicated,
    /// first-occurrence order, capped at MAX_ERROR_LINES.
    pub error_lines: Vec<String>,
}
