mod cli;
mod commands;
mod config;
mod domain_events;
mod main_lib;

use clap::Parser;
use cli::Cli;
use config::Config;
use main_lib::{build_workbench, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_locale(cli.locale.as_deref())?;
    init_tracing(&config);
    let workbench = build_workbench(&config);

    let output = commands::run(&workbench, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
