//! Command runner and repository inspection port.
//!
//! Every interaction with git goes through the `git` executable. The text
//! formats it prints are parsed in [`porcelain`]; the rest of the crate only
//! sees the typed [`GitPort`] interface, which tests replace with a fake.

use anyhow::{Context, Result};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

mod config;
mod index;
pub mod porcelain;
mod refs;
mod worktree;

pub use porcelain::WorktreeRecord;

/// Narrow interface over the git operations the registry and the lifecycle
/// manager need. Paths passed as `worktree` select the directory git runs in
/// (`git -C <worktree>`); operations without one run in the runner's
/// default directory.
pub trait GitPort {
    /// `git rev-parse --git-common-dir`, as printed (may be relative).
    fn git_common_dir(&self) -> Result<PathBuf>;

    /// `git worktree list --porcelain`, parsed.
    fn list_worktrees(&self) -> Result<Vec<WorktreeRecord>>;

    /// Whether `rev` resolves (`git rev-parse --verify`).
    fn ref_exists(&self, rev: &str) -> Result<bool>;

    /// `git worktree add <path> <branch>`
    fn worktree_add(&self, path: &Path, branch: &str) -> Result<()>;

    /// `git worktree add -b <branch> <path> <start_point>`
    fn worktree_add_tracking(&self, path: &Path, branch: &str, start_point: &str) -> Result<()>;

    /// `git worktree add -b <branch> <path>`
    fn worktree_add_new_branch(&self, path: &Path, branch: &str) -> Result<()>;

    /// `git -C <from> worktree remove <path> [--force]`
    fn worktree_remove(&self, from: &Path, path: &Path, force: bool) -> Result<()>;

    /// `git -C <from> branch -d|-D <branch>`
    fn branch_delete(&self, from: &Path, branch: &str, force: bool) -> Result<()>;

    /// Whether `file` is tracked in the index of `worktree`.
    fn is_tracked(&self, worktree: &Path, file: &str) -> Result<bool>;

    /// Toggle the skip-worktree index flag of `file` in `worktree`.
    fn set_skip_worktree(&self, worktree: &Path, file: &str, enabled: bool) -> Result<()>;

    /// Files carrying the skip-worktree flag in `worktree`.
    fn skip_worktree_files(&self, worktree: &Path) -> Result<Vec<String>>;

    /// `git -C <worktree> restore <file>`
    fn restore(&self, worktree: &Path, file: &str) -> Result<()>;

    /// `git config --get <key>`; `None` when unset.
    fn config_get(&self, key: &str) -> Result<Option<String>>;
}

/// Runs the `git` binary.
///
/// `verbose` echoes every invocation to stderr. `dir` is the working
/// directory for invocations that do not target a specific worktree;
/// `None` means the process working directory.
#[derive(Debug, Clone, Default)]
pub struct GitCommand {
    pub(crate) verbose: bool,
    pub(crate) dir: Option<PathBuf>,
}

impl GitCommand {
    pub fn new(verbose: bool) -> Self {
        Self { verbose, dir: None }
    }

    /// Run invocations without a target worktree from `dir`.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    fn command(&self, worktree: Option<&Path>, args: &[OsString]) -> Command {
        let mut cmd = Command::new("git");
        // A targeted worktree is the working directory itself. The default
        // directory may be a worktree this process has already removed.
        match worktree {
            Some(wt) => {
                cmd.current_dir(wt);
            }
            None => {
                if let Some(dir) = &self.dir {
                    cmd.current_dir(dir);
                }
            }
        }
        cmd.args(args);

        if self.verbose {
            let mut rendered = vec!["git".to_string()];
            if let Some(wt) = worktree {
                rendered.push("-C".to_string());
                rendered.push(wt.display().to_string());
            }
            rendered.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
            eprintln!("$ {}", rendered.join(" "));
        }

        cmd
    }

    /// Run git, returning whether it exited successfully together with its
    /// stdout followed by its stderr.
    fn exec(&self, worktree: Option<&Path>, args: &[OsString]) -> Result<(bool, String)> {
        let output = self
            .command(worktree, args)
            .output()
            .context("Failed to execute git")?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Ok((output.status.success(), combined))
    }

    /// Run git and return its combined output. A non-zero exit becomes an
    /// error carrying that output.
    pub(crate) fn run<I, S>(&self, worktree: Option<&Path>, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let args = collect_args(args);
        let (success, combined) = self.exec(worktree, &args)?;

        if !success {
            let subcommand = args
                .first()
                .map(|a| a.to_string_lossy().into_owned())
                .unwrap_or_default();
            anyhow::bail!("git {} failed: {}", subcommand, combined.trim());
        }

        Ok(combined)
    }

    /// Run git and return its combined output, or `None` on a non-zero exit.
    pub(crate) fn try_run<I, S>(&self, worktree: Option<&Path>, args: I) -> Result<Option<String>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let (success, combined) = self.exec(worktree, &collect_args(args))?;
        Ok(success.then_some(combined))
    }

    /// Run git and report only whether it exited successfully.
    pub(crate) fn succeeds<I, S>(&self, worktree: Option<&Path>, args: I) -> Result<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Ok(self.exec(worktree, &collect_args(args))?.0)
    }
}

fn collect_args<I, S>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter().map(|a| a.as_ref().to_os_string()).collect()
}

impl GitPort for GitCommand {
    fn git_common_dir(&self) -> Result<PathBuf> {
        self.rev_parse_git_common_dir()
    }

    fn list_worktrees(&self) -> Result<Vec<WorktreeRecord>> {
        let output = self.worktree_list_porcelain()?;
        Ok(porcelain::parse_worktree_list(&output))
    }

    fn ref_exists(&self, rev: &str) -> Result<bool> {
        self.rev_parse_verify(rev)
    }

    fn worktree_add(&self, path: &Path, branch: &str) -> Result<()> {
        GitCommand::worktree_add(self, path, branch)
    }

    fn worktree_add_tracking(&self, path: &Path, branch: &str, start_point: &str) -> Result<()> {
        GitCommand::worktree_add_tracking(self, path, branch, start_point)
    }

    fn worktree_add_new_branch(&self, path: &Path, branch: &str) -> Result<()> {
        GitCommand::worktree_add_new_branch(self, path, branch)
    }

    fn worktree_remove(&self, from: &Path, path: &Path, force: bool) -> Result<()> {
        GitCommand::worktree_remove(self, from, path, force)
    }

    fn branch_delete(&self, from: &Path, branch: &str, force: bool) -> Result<()> {
        GitCommand::branch_delete(self, from, branch, force)
    }

    fn is_tracked(&self, worktree: &Path, file: &str) -> Result<bool> {
        self.ls_files_error_unmatch(worktree, file)
    }

    fn set_skip_worktree(&self, worktree: &Path, file: &str, enabled: bool) -> Result<()> {
        self.update_index_skip_worktree(worktree, file, enabled)
    }

    fn skip_worktree_files(&self, worktree: &Path) -> Result<Vec<String>> {
        let output = self.ls_files_verbose(worktree)?;
        Ok(porcelain::parse_skip_worktree(&output))
    }

    fn restore(&self, worktree: &Path, file: &str) -> Result<()> {
        GitCommand::restore(self, worktree, file)
    }

    fn config_get(&self, key: &str) -> Result<Option<String>> {
        GitCommand::config_get(self, key)
    }
}
