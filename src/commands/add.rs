use super::Context;
use crate::core::worktree::add::{self, AddParams};
use crate::core::OutputSink;
use crate::error::WorktreeError;
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Creates a new worktree for an existing local or remote branch and navigates
to it. Optionally specify a custom directory name.

When the branch is already checked out in a worktree, navigates to that
worktree instead.
"#)]
pub struct Args {
    #[arg(help = "Existing branch to check out")]
    branch: String,

    #[arg(help = "Worktree directory name (defaults to the branch name)")]
    name: Option<String>,

    #[arg(
        long,
        help = "Remote searched when the branch does not exist locally [default: worktree.remote or origin]"
    )]
    remote: Option<String>,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let mut repo = ctx.repo()?;
    let config = ctx.repo_config(&repo)?;

    let params = AddParams {
        branch: args.branch.clone(),
        name: args.name.clone().unwrap_or_else(|| args.branch.clone()),
        remote: args
            .remote
            .clone()
            .unwrap_or_else(|| ctx.settings.remote.clone()),
    };

    let result = add::execute(
        &mut repo,
        &ctx.git,
        &config,
        &params,
        &mut OutputSink(output),
    );

    match result {
        Ok(worktree) => {
            match &worktree.remote_branch {
                Some(remote_branch) => output.result(&format!(
                    "Worktree created: '{}' (from {remote_branch})",
                    params.name
                )),
                None => output.result(&format!("Worktree created: '{}'", params.name)),
            }
            output.cd_path(&worktree.path);
            Ok(())
        }
        Err(WorktreeError::AlreadyExists { existing }) => {
            output.info(&format!(
                "Worktree already exists for branch '{}': '{}'",
                params.branch, existing.name
            ));
            output.cd_path(&existing.path);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
