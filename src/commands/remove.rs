use super::Context;
use crate::core::repo::Worktree;
use crate::core::worktree::remove;
use crate::core::OutputSink;
use crate::error::{ItemFailure, WorktreeError};
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Removes one or more worktrees, discarding their uncommitted changes. If no
worktree is specified, removes the current worktree. The main worktree can
never be removed.

Targets that cannot be found or removed are reported together at the end;
every other target is still removed.
"#)]
pub struct Args {
    #[arg(help = "Worktree names or branches")]
    targets: Vec<String>,

    #[arg(
        short = 'D',
        long,
        help = "Also delete the branch of each removed worktree (like git branch -D)"
    )]
    force: bool,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let mut repo = ctx.repo()?;
    let config = ctx.repo_config(&repo)?;
    let mut failures = Vec::new();

    let targets: Vec<Worktree> = if args.targets.is_empty() {
        vec![repo.current().ok_or(WorktreeError::NotInWorktree)?.clone()]
    } else {
        let mut found: Vec<Worktree> = Vec::new();
        for target in &args.targets {
            match repo.lookup(target) {
                Ok(wt) if found.iter().any(|f| f.path == wt.path) => {}
                Ok(wt) => found.push(wt.clone()),
                Err(e) => failures.push(ItemFailure::from_error(target.as_str(), e)),
            }
        }
        found
    };

    let had_current = repo.current().is_some();
    let mut removed = Vec::new();
    for target in &targets {
        match remove::execute(
            &mut repo,
            &ctx.git,
            &config,
            target,
            args.force,
            &mut OutputSink(output),
        ) {
            Ok(wt) => removed.push(wt.name),
            Err(e) => failures.push(ItemFailure::from_error(target.name.as_str(), e)),
        }
    }

    if !removed.is_empty() {
        output.result(&format!(
            "Removed {} worktree(s): {}",
            removed.len(),
            removed.join(", ")
        ));
    }

    // The working directory is gone; send the shell back to main.
    if had_current && repo.current().is_none() {
        output.cd_path(&repo.main().path);
    }

    WorktreeError::check_partial(failures, |n| format!("failed to remove {n} worktree(s)"))?;
    Ok(())
}
