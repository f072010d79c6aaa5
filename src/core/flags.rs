//! Skip-worktree flag mechanics shared by the skip and ignore managers.
//!
//! Marking a file sets git's skip-worktree index bit in every worktree. In
//! linked worktrees the file is then replaced by a symlink to the main
//! worktree's copy, so every checkout shares one version of it. The two
//! managers differ only in how the file is brought back when the flag is
//! cleared (see [`RestoreStrategy`]).

use crate::core::repo::{Repo, Worktree};
use crate::error::{ItemFailure, Result, WorktreeError};
use crate::git::GitPort;
use anyhow::{bail, Context};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

/// How a linked worktree's copy of a file is restored after unmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreStrategy {
    /// Replace the symlink with a plain copy of the main worktree's file.
    CopyFromMain,
    /// Drop the symlink and check the branch's own version back out.
    RestoreFromBranch,
}

/// Files carrying the skip-worktree flag in `worktree`.
pub(crate) fn flagged_files(git: &dyn GitPort, worktree: &Worktree) -> Result<BTreeSet<String>> {
    let files = git
        .skip_worktree_files(&worktree.path)
        .with_context(|| format!("failed to read index of worktree '{}'", worktree.name))?;
    Ok(files.into_iter().collect())
}

/// Check that `file` exists in the main worktree and is tracked there.
fn check_tracked_in_main(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    let main = repo.main();
    let path = main.path.join(file);
    if fs::symlink_metadata(&path).is_err() {
        return Err(WorktreeError::Git(anyhow::anyhow!(
            "file does not exist in main worktree: {file}"
        )));
    }
    if !git.is_tracked(&main.path, file)? {
        return Err(WorktreeError::Git(anyhow::anyhow!(
            "file is not tracked by git: {file}"
        )));
    }
    Ok(())
}

/// Set the flag on `file` in `worktree`; in a linked worktree, also point
/// the file at the main worktree's copy.
pub(crate) fn mark_in(
    repo: &Repo,
    git: &dyn GitPort,
    worktree: &Worktree,
    file: &str,
) -> anyhow::Result<()> {
    let target = worktree.path.join(file);
    if fs::symlink_metadata(&target).is_err() {
        bail!("file does not exist");
    }

    git.set_skip_worktree(&worktree.path, file, true)?;

    if !repo.is_main(worktree) {
        let source = repo.main().path.join(file);
        remove_path(&target)?;
        link_file(&source, &target)?;
    }
    Ok(())
}

/// Clear the flag on `file` in `worktree` and restore its content.
pub(crate) fn unmark_in(
    repo: &Repo,
    git: &dyn GitPort,
    worktree: &Worktree,
    file: &str,
    strategy: RestoreStrategy,
) -> anyhow::Result<()> {
    git.set_skip_worktree(&worktree.path, file, false)?;

    if repo.is_main(worktree) {
        return Ok(());
    }

    let target = worktree.path.join(file);
    match strategy {
        RestoreStrategy::CopyFromMain => {
            if is_symlink(&target) {
                remove_path(&target)?;
                let source = repo.main().path.join(file);
                fs::copy(&source, &target).with_context(|| {
                    format!("failed to copy {} from main worktree", source.display())
                })?;
            }
        }
        RestoreStrategy::RestoreFromBranch => {
            if is_symlink(&target) {
                remove_path(&target)?;
                if let Err(e) = git.restore(&worktree.path, file) {
                    if format!("{e:#}").contains("did not match any file") {
                        bail!("file does not exist in this branch");
                    }
                    return Err(e);
                }
            }
        }
    }
    Ok(())
}

/// Mark `file` in every worktree. Worktrees that fail are collected; the
/// rest are still processed.
pub(crate) fn mark_everywhere(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    check_tracked_in_main(repo, git, file)?;

    let failures: Vec<ItemFailure> = repo
        .worktrees()
        .iter()
        .filter_map(|wt| {
            mark_in(repo, git, wt, file)
                .err()
                .map(|e| ItemFailure::new(&wt.name, format!("{e:#}")))
        })
        .collect();

    WorktreeError::check_partial(failures, |n| format!("failed in {n} worktree(s)"))
}

/// Unmark `file` in every worktree, restoring content with `strategy`.
pub(crate) fn unmark_everywhere(
    repo: &Repo,
    git: &dyn GitPort,
    file: &str,
    strategy: RestoreStrategy,
) -> Result<()> {
    let failures: Vec<ItemFailure> = repo
        .worktrees()
        .iter()
        .filter_map(|wt| {
            unmark_in(repo, git, wt, file, strategy)
                .err()
                .map(|e| ItemFailure::new(&wt.name, format!("{e:#}")))
        })
        .collect();

    WorktreeError::check_partial(failures, |n| format!("failed in {n} worktree(s)"))
}

pub(crate) fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}

fn remove_path(path: &Path) -> anyhow::Result<()> {
    let result = match fs::symlink_metadata(path) {
        Ok(meta) if meta.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    };
    result.with_context(|| format!("failed to remove {}", path.display()))
}

#[cfg(unix)]
fn link_file(source: &Path, target: &Path) -> anyhow::Result<()> {
    std::os::unix::fs::symlink(source, target)
        .with_context(|| format!("failed to create symlink {}", target.display()))
}

#[cfg(not(unix))]
fn link_file(source: &Path, target: &Path) -> anyhow::Result<()> {
    fs::copy(source, target)
        .map(|_| ())
        .with_context(|| format!("failed to copy {}", source.display()))
}
