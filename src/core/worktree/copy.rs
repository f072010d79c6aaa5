//! Copying files and directories between worktrees.

use crate::config::RepoConfig;
use crate::core::repo::{Repo, Worktree};
use crate::error::{ItemFailure, Result, WorktreeError};
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Copy a file, symlink or directory tree from `src` to `dst`, creating
/// missing parent directories and overwriting existing files.
pub fn copy_path(src: &Path, dst: &Path) -> anyhow::Result<()> {
    let meta = fs::symlink_metadata(src)
        .with_context(|| format!("source does not exist: {}", src.display()))?;

    if !meta.is_dir() {
        if let Some(parent) = dst.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        return copy_entry(src, dst, meta.file_type().is_symlink());
    }

    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("failed to read {}", src.display()))?;
        let relative = entry
            .path()
            .strip_prefix(src)
            .context("walked outside the source directory")?;
        let target = dst.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("failed to create {}", target.display()))?;
        } else {
            copy_entry(entry.path(), &target, entry.path_is_symlink())?;
        }
    }
    Ok(())
}

fn copy_entry(src: &Path, dst: &Path, is_symlink: bool) -> anyhow::Result<()> {
    if is_symlink {
        let link = fs::read_link(src)
            .with_context(|| format!("failed to read symlink {}", src.display()))?;
        if fs::symlink_metadata(dst).is_ok() {
            fs::remove_file(dst)
                .with_context(|| format!("failed to replace {}", dst.display()))?;
        }
        return symlink(&link, dst);
    }

    // `dst` may already be `src`, e.g. a skipped file linked to main's copy.
    // Copying would truncate the source.
    if same_file(src, dst) {
        return Ok(());
    }

    fs::copy(src, dst)
        .map(|_| ())
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))
}

fn same_file(src: &Path, dst: &Path) -> bool {
    match (fs::canonicalize(src), fs::canonicalize(dst)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(unix)]
fn symlink(link: &Path, dst: &Path) -> anyhow::Result<()> {
    std::os::unix::fs::symlink(link, dst)
        .with_context(|| format!("failed to create symlink {}", dst.display()))
}

#[cfg(not(unix))]
fn symlink(link: &Path, dst: &Path) -> anyhow::Result<()> {
    let source = dst.parent().map(|p| p.join(link)).unwrap_or_else(|| link.to_path_buf());
    fs::copy(&source, dst)
        .map(|_| ())
        .with_context(|| format!("failed to copy {}", source.display()))
}

/// Copy `src_rel` from `source` to `dst_rel` inside `dest`.
pub fn copy_between(
    source: &Worktree,
    dest: &Worktree,
    src_rel: &str,
    dst_rel: &str,
) -> Result<PathBuf> {
    if source.path == dest.path {
        return Err(WorktreeError::SelfCopy);
    }

    let target = dest.path.join(dst_rel);
    copy_path(&source.path.join(src_rel), &target)?;
    Ok(target)
}

/// Copy `src_rel` from the worktree named `from` (default: main) into the
/// current worktree at `dst_rel` (default: the same relative path).
pub fn copy_into_current(
    repo: &Repo,
    from: Option<&str>,
    src_rel: &str,
    dst_rel: Option<&str>,
) -> Result<PathBuf> {
    let current = repo.current().ok_or(WorktreeError::NotInWorktree)?;
    let source = match from {
        Some(identifier) => repo.lookup(identifier)?,
        None => repo.main(),
    };
    copy_between(source, current, src_rel, dst_rel.unwrap_or(src_rel))
}

/// Copy every always-copy path from the main worktree into `dest`.
pub fn apply_always_copy(repo: &Repo, config: &RepoConfig, dest: &Worktree) -> Result<()> {
    let failures: Vec<ItemFailure> = config
        .copy
        .iter()
        .filter_map(|path| {
            copy_between(repo.main(), dest, path, path)
                .err()
                .map(|e| ItemFailure::from_error(path.as_str(), e))
        })
        .collect();

    WorktreeError::check_partial(failures, |n| format!("failed to copy {n} file(s)"))
}
