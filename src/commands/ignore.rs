use super::Context;
use crate::core::ignore;
use crate::error::{ItemFailure, WorktreeError};
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Manages tracked files whose local changes should be ignored in every
worktree. Linked worktrees get a symlink to the main worktree's copy.

With no arguments, lists all ignored files. Use --rm to stop ignoring files;
linked worktrees then get the file back from their own branch.
"#)]
pub struct Args {
    #[arg(help = "Files relative to the worktree root")]
    files: Vec<String>,

    #[arg(long, help = "Remove files from the ignore list")]
    rm: bool,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let repo = ctx.repo()?;

    if args.files.is_empty() {
        let files = ignore::ignored_files(&repo, &ctx.git)?;
        if files.is_empty() {
            output.info("No files with ignored changes.");
        }
        for file in &files {
            output.list_item(file);
        }
        return Ok(());
    }

    let action = if args.rm { "unignore" } else { "ignore" };
    let failures: Vec<ItemFailure> = args
        .files
        .iter()
        .filter_map(|file| {
            let result = if args.rm {
                ignore::unignore(&repo, &ctx.git, file)
            } else {
                ignore::ignore(&repo, &ctx.git, file)
            };
            result
                .err()
                .map(|e| ItemFailure::from_error(file.as_str(), e))
        })
        .collect();

    WorktreeError::check_partial(failures, |n| format!("failed to {action} {n} file(s)"))?;
    Ok(())
}
