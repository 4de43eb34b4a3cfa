#![forbid(unsafe_code)]

mod cli;
mod command_classify;
mod command_languages;
mod command_operands;
mod command_resolve;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::cli::CliAppError;

fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_env("PLURALITY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli::run() {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(CliAppError::Usage(usage)) => {
            eprintln!("{usage}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
