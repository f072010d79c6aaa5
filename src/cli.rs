//! Command-line definition shared by the binary, shell completions and
//! man page generation.

use crate::commands::{add, copy, exclude, ignore, init, list, new, remove, skip, switch};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "worktree")]
#[command(version = crate::VERSION_DISPLAY)]
#[command(about = "Git worktree manager")]
#[command(long_about = r#"
A CLI tool for managing git worktrees with automatic organization and
navigation.

Linked worktrees live in .<repo>.worktrees next to the repository. Install
the wrk shell wrapper to follow the tool into the worktrees it creates:

  eval "$(worktree init bash)"
"#)]
pub struct Cli {
    #[arg(
        short,
        long,
        global = true,
        help = "Show all git commands being executed"
    )]
    pub verbose: bool,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Add an existing branch as a worktree
    Add(add::Args),
    /// Create a worktree with a new branch
    New(new::Args),
    /// List all worktrees
    #[command(visible_alias = "ls")]
    List(list::Args),
    /// Remove worktrees
    #[command(visible_alias = "rm")]
    Remove(remove::Args),
    /// Switch to a worktree
    Switch(switch::Args),
    /// Copy files from another worktree
    Copy(copy::Args),
    /// Manage skipped file changes
    Skip(skip::Args),
    /// Manage ignored file changes
    Ignore(ignore::Args),
    /// Manage patterns in the repository exclude file
    Exclude(exclude::Args),
    /// Generate shell initialization script
    #[command(hide = true)]
    Init(init::Args),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["worktree", "list", "-v", "--no-color"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert!(matches!(cli.command, Command::List(_)));
    }

    #[test]
    fn test_aliases() {
        let cli = Cli::try_parse_from(["worktree", "rm", "feat", "-D"]).unwrap();
        assert!(matches!(cli.command, Command::Remove(_)));
        let cli = Cli::try_parse_from(["worktree", "ls"]).unwrap();
        assert!(matches!(cli.command, Command::List(_)));
    }
}
