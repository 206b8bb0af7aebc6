use serde_json::Value;
use tracing::warn;

use crate::api::ApiClient;
use crate::runner::reporter::TestReporter;
use crate::runner::types::TestResult;

/// Shared state threaded through every check: the authenticated client and
/// the append-only result log. Exclusively owned by the suite runner, so
/// the token set by the login check is visible to every later group.
pub struct RunContext {
    pub client: ApiClient,
    reporter: TestReporter,
    results: Vec<TestResult>,
}

impl RunContext {
    pub fn new(client: ApiClient, reporter: TestReporter) -> Self {
        Self {
            client,
            reporter,
            results: Vec::new(),
        }
    }

    pub fn begin_group(&self, name: &str) {
        self.reporter.print_group(name);
    }

    pub fn pass(&mut self, name: &str, message: impl Into<String>) {
        self.record(TestResult::pass(name, message));
    }

    pub fn fail(&mut self, name: &str, message: impl Into<String>, data: Option<Value>) {
        self.record(TestResult::fail(name, message, data));
    }

    fn record(&mut self, result: TestResult) {
        self.reporter.print_result(&result);
        if !result.success {
            warn!("check failed: {} ({})", result.name, result.message);
        }
        self.results.push(result);
    }

    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    pub fn into_parts(self) -> (TestReporter, Vec<TestResult>) {
        (self.reporter, self.results)
    }
}
