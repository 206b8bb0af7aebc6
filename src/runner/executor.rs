use std::path::PathBuf;
use std::time::Instant;

use tracing::info;

use crate::Result;
use crate::api::ApiClient;
use crate::checks::{self, SUITE};
use crate::runner::context::RunContext;
use crate::runner::report;
use crate::runner::reporter::TestReporter;
use crate::runner::types::{TestResult, TestSummary};

pub struct RunConfig {
    pub base_url: String,
    pub report_path: PathBuf,
    pub verbose: bool,
}

impl RunConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            report_path: PathBuf::from(report::DEFAULT_REPORT_FILE),
            verbose: false,
        }
    }

    pub fn with_report_path(mut self, path: PathBuf) -> Self {
        self.report_path = path;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Everything a run produced: the aggregate summary plus the ordered log.
pub struct RunOutcome {
    pub summary: TestSummary,
    pub results: Vec<TestResult>,
}

impl RunOutcome {
    pub fn all_passed(&self) -> bool {
        self.summary.all_passed()
    }
}

/// Executes the check suite sequentially against one server.
pub struct SuiteRunner {
    config: RunConfig,
}

impl SuiteRunner {
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    /// Run every group in suite order. The login group is the only fatal
    /// one: its failure short-circuits the rest, every other failure is
    /// recorded and the run moves on.
    pub async fn run(&self) -> Result<RunOutcome> {
        let client = ApiClient::new(&self.config.base_url)?;
        let reporter = TestReporter::new(self.config.verbose);
        reporter.print_banner(&self.config.base_url);

        let mut ctx = RunContext::new(client, reporter);
        let start = Instant::now();

        for spec in SUITE {
            ctx.begin_group(spec.name);
            let ok = checks::run_check(spec.kind, &mut ctx).await;
            if !ok && spec.fatal {
                info!("fatal check group '{}' failed, aborting run", spec.name);
                break;
            }
        }

        let duration = start.elapsed();
        let (reporter, results) = ctx.into_parts();
        let summary = TestSummary::from_results(&results, duration);

        reporter.print_summary(&summary, &results);
        report::write_report(&self.config.report_path, &summary, &results)?;
        reporter.print_report_path(&self.config.report_path);

        Ok(RunOutcome { summary, results })
    }
}
