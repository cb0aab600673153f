use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::*;
pub use exit_status::ExitStatus;

use commands::{check::check, init::init, keys::keys, render::render, resolve::resolve};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Keys(cmd) => keys(cmd),
        Command::Resolve(cmd) => resolve(cmd),
        Command::Check(cmd) => check(cmd),
        Command::Render(cmd) => render(cmd),
        Command::Init => init(),
    }
}
