use clap::Parser;
use winzo_smoke::runner::{RunConfig, SuiteRunner};

#[derive(Parser)]
#[command(author, version, about = "WINZO platform API smoke-test suite", long_about = None)]
pub struct Cli {
    /// Base URL for the API
    #[arg(long, default_value = "http://localhost:5000")]
    pub url: String,

    /// Print full response diagnostics for failing checks
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the suite. Returns true when every recorded check passed.
pub async fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = RunConfig::new(&cli.url).with_verbose(cli.verbose);
    let outcome = SuiteRunner::new(config).run().await?;
    Ok(outcome.all_passed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        let cli = Cli::parse_from(["winzo-smoke"]);
        assert_eq!(cli.url, "http://localhost:5000");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_url_flag() {
        let cli = Cli::parse_from(["winzo-smoke", "--url", "http://staging:8080", "-v"]);
        assert_eq!(cli.url, "http://staging:8080");
        assert!(cli.verbose);
    }
}
