//! worktree: a git worktree manager.
//!
//! Linked worktrees are kept in a sibling directory of the repository
//! (`.<repo>.worktrees`) and the `wrk` shell wrapper follows the tool into
//! them through a sentinel line on stdout.

use anyhow::Result;
use std::path::Path;
use which::which;

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod output;
pub mod settings;
pub mod shell;
pub mod styles;
pub mod utils;

/// Prefix of the stdout line that asks the shell wrapper to change directory.
pub const CD_PATH_MARKER: &str = "__WORKTREE_CD__";

/// Per-repository config file, stored in the worktrees directory.
pub const CONFIG_FILE_NAME: &str = ".config.yml";

/// Clean version, used by clap attributes and man pages.
pub const VERSION: &str = env!("WORKTREE_VERSION");

/// Version shown by `worktree --version`; includes branch and hash for dev builds.
pub const VERSION_DISPLAY: &str = env!("WORKTREE_VERSION_DISPLAY");

/// The line the shell wrapper consumes to `cd` into `path`.
pub fn cd_line(path: &Path) -> String {
    format!("{CD_PATH_MARKER}{}", path.display())
}

pub fn check_dependencies() -> Result<()> {
    if which("git").is_err() {
        anyhow::bail!("Missing required dependency: git");
    }
    Ok(())
}
