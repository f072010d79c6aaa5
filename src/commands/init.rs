use crate::output::Output;
use crate::shell::{self, ShellKind};
use anyhow::Result;

#[derive(clap::Args)]
#[command(long_about = r#"
Prints the initialization script that defines the 'wrk' shell function and
the completions for worktree and wrk. Add to your shell configuration:

  eval "$(worktree init bash)"     # ~/.bashrc
  eval "$(worktree init zsh)"      # ~/.zshrc
  worktree init fish | source      # ~/.config/fish/config.fish
"#)]
pub struct Args {
    #[arg(value_enum, help = "Shell to generate the script for")]
    shell: ShellKind,
}

pub fn run(args: &Args, output: &mut dyn Output) -> Result<()> {
    output.raw(&shell::init_script(args.shell));
    Ok(())
}
