mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    winzo_smoke::logger::init_logger();

    let cli = Cli::parse();
    let all_passed = cli::run(cli).await?;
    if !all_passed {
        std::process::exit(1);
    }
    Ok(())
}
