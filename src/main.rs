use aqi_monitor::cli::{run, Cli};
use aqi_monitor::error::Result;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli).await
}
