use super::Context;
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Switches to an existing worktree, looked up by name first and then by
branch. With no argument, switches to the main worktree.

Changing directory requires the wrk shell wrapper (see 'worktree init').
"#)]
pub struct Args {
    #[arg(help = "Worktree name or branch")]
    target: Option<String>,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let repo = ctx.repo()?;
    let worktree = match &args.target {
        Some(target) => repo.lookup(target)?,
        None => repo.main(),
    };
    output.cd_path(&worktree.path);
    Ok(())
}
