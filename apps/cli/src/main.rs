use std::process::ExitCode;

use clap::Parser;
use nesta_cli::cli::Cli;
use nesta_cli::config::AppConfig;
use nesta_cli::{build_state, commands, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::from_env();
    init_tracing();
    let cli = Cli::parse();

    let result = match build_state(config).await {
        Ok(state) => commands::run(cli.command, &state).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(report) => {
            println!("{}", report.text);
            if report.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
