//! `warden` - remote disk usage check
//!
//! Runs the free-space report on every inventory host over SSH and mails a
//! single warning listing each disk at or above its host's threshold.
//! Intended to be started periodically by cron or a systemd timer.

mod cli;
mod run;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run::run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = ?e, "Check run failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
