use clap::Parser;
use std::process::ExitCode;

use csv2json::cli::logging::{init_cli_logger, Verbosity};
use csv2json::cli::{self, Args, CliConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    init_cli_logger(Verbosity::from_flags(args.verbose, args.quiet));

    let result = CliConfig::from_args(args).and_then(|config| {
        if config.is_verbose() {
            tracing::debug!("verbose mode enabled");
        }
        cli::run(&config)
    });

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(error = ?error, "conversion failed");
            cli::handle_error(&error);
            ExitCode::FAILURE
        }
    }
}
