use std::io;

use anyhow::Result;

use super::super::{
    args::ResolveCommand,
    exit_status::ExitStatus,
    report::{print_json, print_resolution, print_trace},
};
use super::helper::CommandContext;
use crate::{binding::Recorder, localizer::Localizer, resolve::resolve as resolve_catalog};

pub fn resolve(cmd: ResolveCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let language = ctx.language(&cmd.language);
    let fallback = ctx.config.fallback_language.as_str();
    let mut stdout = io::stdout().lock();

    if cmd.trace {
        let localizer = Localizer::with_fallback(
            ctx.catalog,
            Recorder::default(),
            Some(language.as_str()),
            fallback,
        )?;
        print_trace(localizer.binding().writes(), &mut stdout)?;
        return Ok(ExitStatus::Success);
    }

    let resolution = resolve_catalog(&ctx.catalog, &language, fallback)?;
    if cmd.json {
        print_json(&resolution.to_json(), &mut stdout)?;
    } else {
        print_resolution(&resolution, &mut stdout)?;
    }
    Ok(ExitStatus::Success)
}
