// LogTriage - core/advice.rs
//
// Canned triage templates, one per log source category.
// Process-wide constant data: never generated, never mutated.

use crate::core::model::LogSource;

/// Fixed response template for one detected source category.
///
/// Summary, cause, and fixes are advisory text shown to the user as-is.
/// Confidence is a fixed score for the category, not a computed value:
/// pattern matches for python/java/jenkins are strong-but-fallible
/// signals, and an unclassified log gets a correspondingly low score.
#[derive(Debug, Clone, Copy)]
pub struct Advice {
    pub summary: &'static str,
    pub likely_cause: &'static str,
    pub suggested_fixes: &'static [&'static str],
    pub confidence: f64,
}

const PYTHON: Advice = Advice {
    summary: "Detected a Python error/exception pattern in the log.",
    likely_cause:
        "Likely an exception raised during runtime (check traceback and the final exception line).",
    suggested_fixes: &[
        "Locate the last exception line in the traceback and identify the failing module/function.",
        "If it's an import/module error, verify dependencies are installed and the correct venv/image is used.",
        "If it's a type/value error, validate inputs and add guards + logging around the failing line.",
    ],
    confidence: 0.78,
};

const JAVA: Advice = Advice {
    summary: "Detected a Java exception pattern in the log.",
    likely_cause: "Likely a runtime exception (inspect 'Caused by' chain to find the root cause).",
    suggested_fixes: &[
        "Search for 'Caused by:' and take the deepest cause as the likely root cause.",
        "Check classpath/dependencies if it’s ClassNotFoundException/NoSuchMethodError.",
        "If NullPointerException, identify the null object and add validations or initialize properly.",
    ],
    confidence: 0.78,
};

const JENKINS: Advice = Advice {
    summary: "Detected a Jenkins pipeline/build failure pattern in the log.",
    likely_cause: "A pipeline stage likely returned a non-zero exit code or a step failed.",
    suggested_fixes: &[
        "Find the failing stage and the command that returned a non-zero exit code.",
        "Re-run locally with the same env vars/tools to reproduce (or run with 'set -x' for shell steps).",
        "Check credentials/secrets, workspace paths, and Docker/K8s connectivity if relevant.",
    ],
    confidence: 0.75,
};

const UNKNOWN: Advice = Advice {
    summary: "Could not confidently classify the log source.",
    likely_cause: "The log may not contain a clear exception/failure signature.",
    suggested_fixes: &[
        "Paste a larger section including the failure moment (a few lines before/after the error).",
        "Include the stacktrace/exit code line if available.",
        "Provide a hint for source (python/java/jenkins) to improve classification.",
    ],
    confidence: 0.35,
};

/// Returns the fixed template for a detected source category.
pub fn for_source(source: LogSource) -> &'static Advice {
    match source {
        LogSource::Python => &PYTHON,
        LogSource::Java => &JAVA,
        LogSource::Jenkins => &JENKINS,
        LogSource::Unknown => &UNKNOWN,
    }
}
