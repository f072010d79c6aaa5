use super::Context;
use crate::core::worktree::new::{self, NewParams};
use crate::core::OutputSink;
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Creates a new branch together with a worktree for it and navigates to the
worktree. Optionally specify a custom directory name.

Skipped files, always-copy paths and post-create commands from the
repository config are applied to the new worktree.
"#)]
pub struct Args {
    #[arg(help = "Branch to create")]
    branch: String,

    #[arg(help = "Worktree directory name (defaults to the branch name)")]
    name: Option<String>,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let mut repo = ctx.repo()?;
    let config = ctx.repo_config(&repo)?;

    let params = NewParams {
        branch: args.branch.clone(),
        name: args.name.clone().unwrap_or_else(|| args.branch.clone()),
    };

    let worktree = new::execute(
        &mut repo,
        &ctx.git,
        &config,
        &params,
        &mut OutputSink(output),
    )?;

    output.result(&format!("Worktree created: '{}'", params.name));
    output.cd_path(&worktree.path);
    Ok(())
}
