use anyhow::Result;
use clap::Parser;
use weather_globe::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_globe::run(cli).await
}
