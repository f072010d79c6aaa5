use super::Context;
use crate::core::worktree::list;
use crate::output::Output;
use anyhow::{Context as _, Result};

#[derive(clap::Args)]
#[command(long_about = r#"
Lists every worktree of the repository: the main worktree first (marked
with '>'), then the others alphabetically. The worktree you are in is
marked with '*'. A worktree whose branch differs from its name shows the
branch in brackets.
"#)]
pub struct Args {
    #[arg(long, help = "Print the worktrees as a JSON array")]
    json: bool,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let repo = ctx.repo()?;

    if args.json {
        let json = serde_json::to_string_pretty(&list::entries(&repo))
            .context("Failed to serialize worktree list")?;
        output.raw(&format!("{json}\n"));
        return Ok(());
    }

    if repo.worktrees().is_empty() {
        output.info("No worktrees found.");
        return Ok(());
    }

    let color = output.color();
    for worktree in repo.sorted() {
        output.list_item(&list::display_line(&repo, worktree, color));
    }
    Ok(())
}
