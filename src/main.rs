use std::{io, process::ExitCode};

use clap::Parser;
use i18nbind::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match i18nbind::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `--verbose` selects debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .without_time()
        .with_writer(io::stderr)
        .init();
}
