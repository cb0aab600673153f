use std::io::{self, Write};

use anyhow::Result;

use super::super::{args::RenderCommand, exit_status::ExitStatus};
use super::helper::CommandContext;
use crate::{binding::Document, localizer::Localizer};

pub fn render(cmd: RenderCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let language = ctx.language(&cmd.language);
    let document = Document::load(&cmd.document)?.with_markers(ctx.config.markers());

    let localizer = Localizer::with_fallback(
        ctx.catalog,
        document,
        Some(language.as_str()),
        &ctx.config.fallback_language,
    )?;

    let json = localizer.into_binding().to_json_pretty()?;
    writeln!(io::stdout().lock(), "{}", json)?;
    Ok(ExitStatus::Success)
}
