use super::Context;
use crate::core::repo::Repo;
use crate::core::skip::{self, SkipState};
use crate::error::{self, ItemFailure, WorktreeError};
use crate::git::GitPort;
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Manages files whose local changes git should not see, without touching
.gitignore. Uses git update-index --skip-worktree.

With no arguments, lists all skipped files. With file arguments, skips them
in every worktree; linked worktrees get a symlink to the main worktree's
copy. Use --rm to unskip files instead.

With --local, only the current worktree is affected (not allowed in the
main worktree).
"#)]
pub struct Args {
    #[arg(help = "Files relative to the worktree root")]
    files: Vec<String>,

    #[arg(long, help = "Remove files from the skip list")]
    rm: bool,

    #[arg(
        long,
        help = "Only affect the current worktree (does not work in the main worktree)"
    )]
    local: bool,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let repo = ctx.repo()?;

    if args.files.is_empty() {
        let entries = skip::status(&repo, &ctx.git)?;
        if entries.is_empty() {
            output.info("No files with skipped changes.");
        }
        for entry in entries {
            let line = match entry.state {
                SkipState::Shared => entry.file,
                SkipState::LocallyUnskipped => format!("{} (locally unskipped)", entry.file),
                SkipState::LocallyOnly => format!("{} (locally skipped only)", entry.file),
            };
            output.list_item(&line);
        }
        return Ok(());
    }

    let op: fn(&Repo, &dyn GitPort, &str) -> error::Result<()> = match (args.rm, args.local) {
        (false, false) => skip::skip,
        (true, false) => skip::unskip,
        (false, true) => skip::skip_local,
        (true, true) => skip::unskip_local,
    };
    let action = if args.rm { "unskip" } else { "skip" };

    let failures: Vec<ItemFailure> = args
        .files
        .iter()
        .filter_map(|file| {
            op(&repo, &ctx.git, file)
                .err()
                .map(|e| ItemFailure::from_error(file.as_str(), e))
        })
        .collect();

    WorktreeError::check_partial(failures, |n| format!("failed to {action} {n} file(s)"))?;
    Ok(())
}
