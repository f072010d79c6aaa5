use super::Context;
use crate::core::exclude::ExcludeFile;
use crate::error::{ItemFailure, WorktreeError};
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Manages patterns in the repository's .git/info/exclude file, which works
like a .gitignore that is never committed and applies to every worktree.

With no arguments, lists the excluded patterns. Use --rm to remove patterns
instead of adding them.
"#)]
pub struct Args {
    #[arg(help = "Gitignore-style patterns")]
    patterns: Vec<String>,

    #[arg(long, help = "Remove patterns from the exclude file")]
    rm: bool,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let repo = ctx.repo()?;
    let exclude = ExcludeFile::for_repo(&repo);

    if args.patterns.is_empty() {
        let patterns = exclude.patterns()?;
        if patterns.is_empty() {
            output.info("No excluded patterns");
        }
        for pattern in &patterns {
            output.list_item(pattern);
        }
        return Ok(());
    }

    let action = if args.rm { "unexclude" } else { "exclude" };
    let failures: Vec<ItemFailure> = args
        .patterns
        .iter()
        .filter_map(|pattern| {
            let result = if args.rm {
                exclude.remove(pattern)
            } else {
                exclude.add(pattern)
            };
            result
                .err()
                .map(|e| ItemFailure::from_error(pattern.as_str(), e))
        })
        .collect();

    WorktreeError::check_partial(failures, |n| format!("failed to {action} {n} pattern(s)"))?;
    Ok(())
}
