use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::Result;
use crate::runner::types::{TestResult, TestSummary};

/// Default artifact name, overwritten on every run.
pub const DEFAULT_REPORT_FILE: &str = "test_results.json";

#[derive(Serialize)]
struct Report<'a> {
    summary: &'a TestSummary,
    detailed_results: &'a [TestResult],
}

/// Write the run report as pretty-printed JSON.
pub fn write_report(path: &Path, summary: &TestSummary, results: &[TestResult]) -> Result<()> {
    let report = Report {
        summary,
        detailed_results: results,
    };
    let json = serde_json::to_string_pretty(&report)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_written_report_is_valid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(DEFAULT_REPORT_FILE);

        let results = vec![
            TestResult::pass("User Login", "Successfully logged in"),
            TestResult::fail(
                "Get Sports",
                "Sports retrieval failed",
                Some(serde_json::json!({"success": false})),
            ),
        ];
        let summary = TestSummary::from_results(&results, Duration::from_secs(2));

        write_report(&path, &summary, &results).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["summary"]["total_tests"], 2);
        assert_eq!(parsed["summary"]["passed_tests"], 1);
        assert_eq!(parsed["detailed_results"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["detailed_results"][0]["test"], "User Login");
    }
}
