use anyhow::Result;
use tracing::debug;

use super::super::args::CheckCommand;
use super::{CommandResult, CommandSummary, helper::finish};
use crate::{core::CheckContext, issues::Issue, rules::check_unused_style_issues};

pub fn check(cmd: CheckCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.args.common)?;

    let mut all_issues: Vec<Issue> = check_unused_style_issues(&ctx);
    all_issues.extend(ctx.parse_errors().iter().cloned().map(Issue::ParseError));

    if let Some(resolver) = ctx.resolver() {
        debug!(modules = resolver.cache().len(), "resolution cache");
    }

    Ok(finish(CommandSummary::Check, all_issues, ctx.files.len()))
}
