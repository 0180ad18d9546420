use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use comment_toggle::atoms::storage::config_path;
use comment_toggle::coordinator::cli::{Cli, RunStatus, load_cli_config, run};
use comment_toggle::types::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_app(&cli) {
        Ok(RunStatus::Success) => ExitCode::SUCCESS,
        Ok(RunStatus::Failed) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8, config: &Config) {
    let level = match verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_app(cli: &Cli) -> Result<RunStatus> {
    // The log level lives in the config, so the subscriber can only start
    // once the config is loaded.
    let (config, created) = load_cli_config(cli)?;
    init_tracing(cli.verbose, &config);
    if created {
        tracing::info!(path = %config_path().display(), "wrote default config");
    }

    run(cli, config, &mut io::stdout().lock(), &mut io::stderr().lock())
}
