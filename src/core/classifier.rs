// LogTriage - core/classifier.rs
//
// Log source classification and candidate error line extraction.
// Core layer: pure logic over the submitted text, no I/O, no HTTP types.
//
// Classification is a precedence rule, not a scoring rule: detection
// tiers are evaluated in a fixed order and the first tier with any
// matching pattern wins. A log containing both a Python traceback and a
// Jenkins "ERROR" token is therefore classified as python.

use crate::core::advice;
use crate::core::model::{LogSource, Triage};
use crate::util::constants;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// A detection tier: one source category plus the compiled patterns
/// that identify it. Any single pattern matching anywhere in the text
/// assigns the tier's category.
struct Tier {
    source: LogSource,
    patterns: Vec<Regex>,
}

/// The fixed detection tiers in priority order (python > java > jenkins).
///
/// Compiled once on first use and shared read-only afterwards.
fn tiers() -> &'static [Tier] {
    static TIERS: OnceLock<Vec<Tier>> = OnceLock::new();

    TIERS.get_or_init(|| {
        // Helper to compile a regex without panicking at runtime.
        // Patterns are exercised by the unit tests below, so any mistake
        // shows up as a failing test rather than a runtime panic.
        fn re(pat: &str) -> Regex {
            Regex::new(pat).expect("classifier: invalid regex")
        }

        vec![
            // ------------------------------------------------------------------
            // Tier 1: Python. Traceback header (any case) or a common
            // exception class name as a whole word.
            // Examples:
            //   Traceback (most recent call last):
            //   ValueError: invalid literal for int()
            //   ModuleNotFoundError: No module named 'requests'
            // ------------------------------------------------------------------
            Tier {
                source: LogSource::Python,
                patterns: vec![
                    re(r"(?i)Traceback \(most recent call last\):"),
                    re(r"\b(ModuleNotFoundError|ImportError|ValueError|TypeError|KeyError|AttributeError)\b"),
                ],
            },
            // ------------------------------------------------------------------
            // Tier 2: Java. Thread-level exception banner, a "Caused by:"
            // chain link, or a common exception/error class name.
            // Examples:
            //   Exception in thread "main" java.lang.NullPointerException
            //   Caused by: java.sql.SQLException
            //   java.lang.OutOfMemoryError: Java heap space
            // ------------------------------------------------------------------
            Tier {
                source: LogSource::Java,
                patterns: vec![
                    re(r"\bException in thread\b"),
                    re(r"\b(Caused by:)\b"),
                    re(r"\b(NullPointerException|ClassNotFoundException|NoSuchMethodError|OutOfMemoryError)\b"),
                ],
            },
            // ------------------------------------------------------------------
            // Tier 3: Jenkins. Build result line, shell step exit code
            // phrase (any case), or an upper-case ERROR token.
            // Examples:
            //   Finished: FAILURE
            //   script returned exit code 1
            //   ERROR: Build step failed with exception
            // ------------------------------------------------------------------
            Tier {
                source: LogSource::Jenkins,
                patterns: vec![
                    re(r"\bFinished: FAILURE\b"),
                    re(r"(?i)\bscript returned exit code\b"),
                    re(r"\bERROR:?\b"),
                ],
            },
        ]
    })
}

/// Classify raw log text into a source category.
///
/// Tiers are checked in priority order with early return on the first
/// match; text matching no tier is `Unknown`.
pub fn detect_source(text: &str) -> LogSource {
    for tier in tiers() {
        if tier.patterns.iter().any(|p| p.is_match(text)) {
            return tier.source;
        }
    }
    LogSource::Unknown
}

/// Surface up to `max_lines` candidate error lines from the log text.
///
/// A line is a candidate when, case-insensitively, it contains at least
/// one of ERROR_LINE_KEYWORDS as a substring. Lines are trimmed of
/// trailing whitespace, deduplicated by exact equality, and returned in
/// first-occurrence order. Total over its input: empty text (or a zero
/// cap) yields an empty list.
pub fn extract_error_lines(text: &str, max_lines: usize) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut candidates: Vec<String> = Vec::new();

    for line in text.lines() {
        if candidates.len() >= max_lines {
            break;
        }
        let line = line.trim_end();
        let low = line.to_lowercase();
        if constants::ERROR_LINE_KEYWORDS
            .iter()
            .any(|keyword| low.contains(keyword))
            && seen.insert(line)
        {
            candidates.push(line.to_string());
        }
    }

    candidates
}

/// Analyse one submitted log: extract candidate error lines, detect the
/// source category, and attach the canned advice template.
///
/// `hint` is the caller's weak signal: it only applies when detection
/// returns `Unknown`, and an `Unknown` hint never changes anything. The
/// function has no failure modes; unclassifiable text falls through to
/// the unknown template.
pub fn analyze(text: &str, hint: LogSource) -> Triage {
    let error_lines = extract_error_lines(text, constants::MAX_ERROR_LINES);

    let mut source = detect_source(text);
    if source == LogSource::Unknown && hint.is_known() {
        source = hint;
    }

    let advice = advice::for_source(source);

    tracing::debug!(
        source = %source,
        error_lines = error_lines.len(),
        "Log analysed"
    );

    Triage {
        source,
        summary: advice.summary,
        likely_cause: advice.likely_cause,
        suggested_fixes: advice.suggested_fixes,
        confidence: advice.confidence,
        error_lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Detection tiers
    // -------------------------------------------------------------------------

    #[test]
    fn test_detects_python_traceback_header() {
        assert_eq!(
            detect_source("Traceback (most recent call last):\n  File \"app.py\", line 3"),
            LogSource::Python
        );
    }

    /// The traceback header pattern is case-insensitive.
    #[test]
    fn test_detects_python_traceback_header_any_case() {
        assert_eq!(
            detect_source("TRACEBACK (MOST RECENT CALL LAST):"),
            LogSource::Python
        );
    }

    #[test]
    fn test_detects_python_exception_names() {
        assert_eq!(
            detect_source("KeyError: 'user_id'"),
            LogSource::Python
        );
        assert_eq!(
            detect_source("ModuleNotFoundError: No module named 'requests'"),
            LogSource::Python
        );
    }

    /// Exception class names only match as whole words.
    #[test]
    fn test_python_exception_name_requires_word_boundary() {
        assert_eq!(detect_source("MyValueErrorLike type"), LogSource::Unknown);
    }

    #[test]
    fn test_detects_java_exception_in_thread() {
        assert_eq!(
            detect_source("Exception in thread \"main\" java.lang.RuntimeException: boom"),
            LogSource::Java
        );
    }

    #[test]
    fn test_detects_java_exception_class_names() {
        assert_eq!(
            detect_source("java.lang.OutOfMemoryError: Java heap space"),
            LogSource::Java
        );
        assert_eq!(
            detect_source("at handler: NullPointerException"),
            LogSource::Java
        );
    }

    #[test]
    fn test_detects_jenkins_finished_failure() {
        assert_eq!(
            detect_source("[Pipeline] End of Pipeline\nFinished: FAILURE"),
            LogSource::Jenkins
        );
    }

    /// The exit code phrase matches regardless of case.
    #[test]
    fn test_detects_jenkins_exit_code_phrase_any_case() {
        assert_eq!(
            detect_source("Script returned exit code 2"),
            LogSource::Jenkins
        );
    }

    /// The bare ERROR token only matches in upper case; a lowercase
    /// "error:" on its own carries no Jenkins signal.
    #[test]
    fn test_jenkins_error_token_is_case_sensitive() {
        assert_eq!(
            detect_source("ERROR: Build step failed with exception"),
            LogSource::Jenkins
        );
        assert_eq!(detect_source("error: something minor"), LogSource::Unknown);
    }

    #[test]
    fn test_unclassifiable_text_returns_unknown() {
        assert_eq!(detect_source("build completed, all good"), LogSource::Unknown);
        assert_eq!(detect_source(""), LogSource::Unknown);
    }

    // -------------------------------------------------------------------------
    // Tier precedence
    // -------------------------------------------------------------------------

    /// A log matching both the python and jenkins tiers is python: tiers
    /// are evaluated in priority order with early return, not scored.
    #[test]
    fn test_python_tier_wins_over_jenkins() {
        let text = "Traceback (most recent call last):\n\
                    ValueError: bad input\n\
                    Finished: FAILURE";
        assert_eq!(detect_source(text), LogSource::Python);
    }

    #[test]
    fn test_java_tier_wins_over_jenkins() {
        let text = "Exception in thread \"main\" java.lang.RuntimeException\n\
                    Finished: FAILURE";
        assert_eq!(detect_source(text), LogSource::Java);
    }

    // -------------------------------------------------------------------------
    // Error line extraction
    // -------------------------------------------------------------------------

    #[test]
    fn test_extracts_keyword_lines_case_insensitively() {
        let text = "Starting build\nERROR: disk full\nall good\nJob FAILED";
        assert_eq!(
            extract_error_lines(text, 25),
            vec!["ERROR: disk full".to_string(), "Job FAILED".to_string()]
        );
    }

    /// Keywords are substrings: "ValueError" contains "error" once
    /// lowercased, so the line is a candidate even though the bare word
    /// "error" never appears.
    #[test]
    fn test_keywords_match_inside_words() {
        assert_eq!(
            extract_error_lines("ValueError: bad input", 25),
            vec!["ValueError: bad input".to_string()]
        );
    }

    #[test]
    fn test_extraction_trims_trailing_whitespace() {
        let lines = extract_error_lines("connection failed   \t\n", 25);
        assert_eq!(lines, vec!["connection failed".to_string()]);
    }

    #[test]
    fn test_extraction_dedupes_preserving_first_occurrence_order() {
        let text = "error: one\nerror: two\nerror: one\nerror: three\nerror: two";
        assert_eq!(
            extract_error_lines(text, 25),
            vec![
                "error: one".to_string(),
                "error: two".to_string(),
                "error: three".to_string(),
            ]
        );
    }

    #[test]
    fn test_extraction_caps_at_limit() {
        let text: String = (0..40)
            .map(|i| format!("error number {i}\n"))
            .collect();
        let lines = extract_error_lines(&text, 25);
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "error number 0");
        assert_eq!(lines[24], "error number 24");
    }

    #[test]
    fn test_extraction_empty_input_yields_empty() {
        assert!(extract_error_lines("", 25).is_empty());
        assert!(extract_error_lines("\n\n\n", 25).is_empty());
    }

    #[test]
    fn test_extraction_zero_cap_yields_empty() {
        assert!(extract_error_lines("error: plenty here", 0).is_empty());
    }

    // -------------------------------------------------------------------------
    // Full analysis
    // -------------------------------------------------------------------------

    #[test]
    fn test_analyze_python_traceback() {
        let triage = analyze(
            "Traceback (most recent call last):\nValueError: bad input",
            LogSource::Unknown,
        );
        assert_eq!(triage.source, LogSource::Python);
        assert_eq!(triage.confidence, 0.78);
        // Both lines carry a keyword: "traceback" on the first, and the
        // "error" substring inside "ValueError" on the second.
        assert_eq!(
            triage.error_lines,
            vec![
                "Traceback (most recent call last):".to_string(),
                "ValueError: bad input".to_string(),
            ]
        );
    }

    #[test]
    fn test_analyze_log_with_no_signal() {
        let triage = analyze("build completed, all good", LogSource::Unknown);
        assert_eq!(triage.source, LogSource::Unknown);
        assert_eq!(triage.confidence, 0.35);
        assert!(triage.error_lines.is_empty());
    }

    #[test]
    fn test_hint_resolves_unknown_classification() {
        let triage = analyze("nothing recognisable here", LogSource::Java);
        assert_eq!(triage.source, LogSource::Java);
        assert_eq!(triage.confidence, 0.78);
    }

    #[test]
    fn test_unknown_hint_changes_nothing() {
        let triage = analyze("nothing recognisable here", LogSource::Unknown);
        assert_eq!(triage.source, LogSource::Unknown);
    }

    /// A successful pattern match always beats the caller's hint.
    #[test]
    fn test_hint_never_overrides_a_pattern_match() {
        let triage = analyze(
            "java.lang.NullPointerException at Foo.java:42",
            LogSource::Python,
        );
        assert_eq!(triage.source, LogSource::Java);
    }

    #[test]
    fn test_analyze_is_pure_and_idempotent() {
        let text = "ERROR: step failed\nFinished: FAILURE";
        let first = analyze(text, LogSource::Unknown);
        let second = analyze(text, LogSource::Unknown);
        assert_eq!(first, second);
    }

    #[test]
    fn test_analyze_is_total_over_arbitrary_input() {
        let inputs = [
            "",
            "   ",
            "\r\n\r\n",
            "日本語のログ行\nエラーなし",
            "null\0byte",
            "error",
        ];
        for text in inputs {
            let triage = analyze(text, LogSource::Unknown);
            assert!((0.0..=1.0).contains(&triage.confidence));
            assert!(LogSource::all().contains(&triage.source));
            assert!(triage.error_lines.len() <= crate::util::constants::MAX_ERROR_LINES);
        }
    }
}
