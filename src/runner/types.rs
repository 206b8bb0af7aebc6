use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of one logical check.
///
/// Immutable once created; the run context appends these in execution
/// order, which is also the order of the written report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestResult {
    /// Check name, e.g. "User Login"
    #[serde(rename = "test")]
    pub name: String,

    pub success: bool,

    /// Human-readable outcome, shown on the progress line
    pub message: String,

    /// When the check finished (ISO-8601)
    pub timestamp: DateTime<Utc>,

    /// Diagnostic payload for failures: raw response body or error text
    pub data: Option<Value>,
}

impl TestResult {
    pub fn pass(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            success: true,
            message: message.into(),
            timestamp: Utc::now(),
            data: None,
        }
    }

    pub fn fail(name: &str, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            name: name.to_string(),
            success: false,
            message: message.into(),
            timestamp: Utc::now(),
            data,
        }
    }
}

/// Aggregate statistics over one run, computed once at the end.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSummary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Percentage, 0.0 when no checks ran
    pub success_rate: f64,
    /// Wall-clock seconds across the whole suite
    pub duration: f64,
    pub timestamp: DateTime<Utc>,
}

impl TestSummary {
    pub fn from_results(results: &[TestResult], duration: Duration) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.success).count();

        // Guard the empty run, no dividing by zero
        let success_rate = if total == 0 {
            0.0
        } else {
            (passed as f64 / total as f64) * 100.0
        };

        Self {
            total_tests: total,
            passed_tests: passed,
            failed_tests: total - passed,
            success_rate,
            duration: duration.as_secs_f64(),
            timestamp: Utc::now(),
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed_tests == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_add_up() {
        let results = vec![
            TestResult::pass("User Login", "Successfully logged in"),
            TestResult::fail("Get Profile", "Profile retrieval failed", None),
            TestResult::pass("Get Sports", "Retrieved 3 sports"),
        ];

        let summary = TestSummary::from_results(&results, Duration::from_millis(1500));
        assert_eq!(summary.total_tests, 3);
        assert_eq!(summary.passed_tests, 2);
        assert_eq!(summary.failed_tests, 1);
        assert_eq!(summary.passed_tests + summary.failed_tests, summary.total_tests);
        assert!((summary.success_rate - 66.666_666).abs() < 0.001);
        assert_eq!(summary.duration, 1.5);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_summary_empty_run() {
        let summary = TestSummary::from_results(&[], Duration::ZERO);
        assert_eq!(summary.total_tests, 0);
        assert_eq!(summary.success_rate, 0.0);
        assert!(summary.all_passed());
    }

    #[test]
    fn test_result_serializes_with_wire_names() {
        let result = TestResult::fail(
            "Place Bet",
            "No events available for testing",
            Some(serde_json::json!({"success": false})),
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["test"], "Place Bet");
        assert_eq!(json["success"], false);
        assert!(json["timestamp"].is_string());
    }
}
