use super::Context;
use crate::core::worktree::copy;
use crate::output::Output;
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Copies files or directories from another worktree into the current one. By
default copies from the main worktree. If dest-path is not specified,
source-path is used as the destination.

Use --always to add the path to the config so it is copied into every new
worktree, or --always with no path to list the always-copy paths. Use
--always-rm to remove a path from the always-copy list.
"#)]
pub struct Args {
    #[arg(help = "Path relative to the source worktree")]
    source_path: Option<String>,

    #[arg(help = "Path relative to the current worktree (defaults to source-path)")]
    dest_path: Option<String>,

    #[arg(
        short,
        long,
        help = "Source worktree name or branch (defaults to the main worktree)"
    )]
    from: Option<String>,

    #[arg(
        long,
        conflicts_with = "always_rm",
        help = "Add the path to the always-copy list"
    )]
    always: bool,

    #[arg(long, help = "Remove the path from the always-copy list")]
    always_rm: bool,
}

pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    let repo = ctx.repo()?;

    if args.always || args.always_rm {
        let mut config = ctx.repo_config(&repo)?;
        return match (&args.source_path, args.always) {
            (None, true) => {
                if config.copy.is_empty() {
                    output.info("No always-copy paths configured");
                } else {
                    for path in &config.copy {
                        output.list_item(path);
                    }
                }
                Ok(())
            }
            (None, false) => anyhow::bail!("path required for --always-rm"),
            (Some(path), true) => {
                config.add_copy_path(&repo, path)?;
                output.result(&format!("Added '{path}' to always-copy list"));
                Ok(())
            }
            (Some(path), false) => {
                config.remove_copy_path(&repo, path)?;
                output.result(&format!("Removed '{path}' from always-copy list"));
                Ok(())
            }
        };
    }

    let Some(source_path) = &args.source_path else {
        anyhow::bail!("source path required");
    };

    let target = copy::copy_into_current(
        &repo,
        args.from.as_deref(),
        source_path,
        args.dest_path.as_deref(),
    )?;
    output.step(&format!("Copied '{source_path}' to '{}'", target.display()));
    Ok(())
}
