use std::io;

use anyhow::Result;

use super::super::{args::CheckCommand, exit_status::ExitStatus, report::print_audit};
use super::helper::CommandContext;
use crate::resolve::audit;

/// Audit the catalog against every language it mentions plus the configured
/// query languages.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let ctx = CommandContext::new(&cmd.common)?;
    let fallback = &ctx.config.fallback_language;

    let mut languages = ctx.catalog.languages();
    for language in &ctx.config.languages {
        if !languages.contains(language) {
            languages.push(language.clone());
        }
    }
    languages.sort();

    let audit = audit(&ctx.catalog, &languages, fallback);
    let keys_checked = ctx.catalog.key_paths().len();
    print_audit(&audit, fallback, keys_checked, &mut io::stdout().lock())?;

    if audit.missing_fallback.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
