pub mod context;
pub mod executor;
pub mod report;
pub mod reporter;
pub mod types;

pub use context::RunContext;
pub use executor::{RunConfig, RunOutcome, SuiteRunner};
pub use reporter::TestReporter;
pub use types::{TestResult, TestSummary};
