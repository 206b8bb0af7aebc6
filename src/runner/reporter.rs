use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, Table};

use crate::runner::types::{TestResult, TestSummary};

pub struct TestReporter {
    verbose: bool,
}

impl TestReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn print_banner(&self, base_url: &str) {
        println!("{}", "━".repeat(60));
        println!("{}", "Starting WINZO Platform Comprehensive Tests".bold());
        println!("Target: {}", base_url.cyan());
        println!("{}", "━".repeat(60));
    }

    /// Group header, printed before each check group runs.
    pub fn print_group(&self, name: &str) {
        println!("\nTesting {}...", name.bold());
    }

    /// One progress line per recorded check.
    pub fn print_result(&self, result: &TestResult) {
        let status = if result.success {
            "PASS".green()
        } else {
            "FAIL".red()
        };
        println!(" {} {}: {}", status, result.name, result.message);

        // Failures always show their diagnostic; verbose shows it pretty
        if result.success {
            return;
        }
        if let Some(data) = &result.data {
            if self.verbose {
                let pretty =
                    serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string());
                for line in pretty.lines() {
                    println!("   {}", line.dimmed());
                }
            } else {
                println!("   {} {}", "Error details:".red(), data);
            }
        }
    }

    pub fn print_summary(&self, summary: &TestSummary, results: &[TestResult]) {
        println!("\n{}", "━".repeat(60));
        println!("{}", "TEST SUMMARY".bold());
        println!("{}", "━".repeat(60));
        println!("  Total Tests: {}", summary.total_tests);
        println!("  Passed: {}", summary.passed_tests.to_string().green());
        println!("  Failed: {}", summary.failed_tests.to_string().red());
        println!("  Success Rate: {:.1}%", summary.success_rate);
        println!("  Duration: {:.2} seconds", summary.duration);

        if summary.failed_tests > 0 {
            println!("\n{}", "FAILED TESTS:".red().bold());

            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_header(vec!["Check", "Message"]);
            for result in results.iter().filter(|r| !r.success) {
                table.add_row(vec![
                    Cell::new(&result.name).fg(Color::Red),
                    Cell::new(&result.message).add_attribute(Attribute::Dim),
                ]);
            }
            println!("{}", table);
        }
    }

    pub fn print_report_path(&self, path: &std::path::Path) {
        println!("\nDetailed results saved to {}", path.display());
    }
}

impl Default for TestReporter {
    fn default() -> Self {
        Self::new(false)
    }
}
