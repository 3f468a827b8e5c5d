use clap::Parser;
use podkit::cli::CleanupCli;
use podkit::commands::{handle_cleanup, report_fatal};
use podkit::logging::init_cli_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_cli_logging();
    let cli = CleanupCli::parse();

    match handle_cleanup(&cli) {
        Ok(outcome) if outcome.success() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            report_fatal(cli.json, &e);
            ExitCode::from(1)
        }
    }
}
