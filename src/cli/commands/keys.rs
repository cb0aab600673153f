use std::io;

use anyhow::Result;

use super::super::{args::KeysCommand, exit_status::ExitStatus, report::print_keys};
use super::helper::CommandContext;

pub fn keys(cmd: KeysCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let keys = ctx.catalog.key_paths();
    print_keys(&keys, &mut io::stdout().lock())?;
    Ok(ExitStatus::Success)
}
