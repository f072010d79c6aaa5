//! Skipped files: tracked files whose local changes git should not see,
//! shared across worktrees through symlinks to the main worktree's copy.

use super::flags::{self, RestoreStrategy};
use crate::core::repo::{Repo, Worktree};
use crate::core::ProgressSink;
use crate::error::{ItemFailure, Result, WorktreeError};
use crate::git::GitPort;

/// Skip `file` in every worktree.
pub fn skip(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    flags::mark_everywhere(repo, git, file)
}

/// Stop skipping `file` in every worktree. Linked worktrees get a plain copy
/// of the main worktree's file in place of the symlink.
pub fn unskip(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    flags::unmark_everywhere(repo, git, file, RestoreStrategy::CopyFromMain)
}

fn current_linked<'a>(repo: &'a Repo, action: &'static str) -> Result<&'a Worktree> {
    let current = repo.current().ok_or(WorktreeError::NotInWorktree)?;
    if repo.is_main(current) {
        return Err(WorktreeError::ProtectedResource { action });
    }
    Ok(current)
}

/// Skip `file` in the current worktree only.
pub fn skip_local(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    let current = current_linked(repo, "locally skip files in")?;
    flags::mark_in(repo, git, current, file)?;
    Ok(())
}

/// Stop skipping `file` in the current worktree only.
pub fn unskip_local(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    let current = current_linked(repo, "locally unskip files in")?;
    flags::unmark_in(repo, git, current, file, RestoreStrategy::CopyFromMain)?;
    Ok(())
}

/// How a skipped file relates to the current worktree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipState {
    /// Skipped in main and in the current worktree.
    Shared,
    /// Skipped in main, but not in the current worktree.
    LocallyUnskipped,
    /// Skipped in the current worktree only.
    LocallyOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipEntry {
    pub file: String,
    pub state: SkipState,
}

/// Every skipped file as seen from the current worktree, sorted by path.
pub fn status(repo: &Repo, git: &dyn GitPort) -> Result<Vec<SkipEntry>> {
    let current = repo.current().ok_or(WorktreeError::NotInWorktree)?;
    let shared = flags::flagged_files(git, repo.main())?;
    let local = if repo.is_main(current) {
        shared.clone()
    } else {
        flags::flagged_files(git, current)?
    };

    let entries = shared
        .union(&local)
        .map(|file| {
            let state = match (shared.contains(file), local.contains(file)) {
                (true, true) => SkipState::Shared,
                (true, false) => SkipState::LocallyUnskipped,
                _ => SkipState::LocallyOnly,
            };
            SkipEntry {
                file: file.clone(),
                state,
            }
        })
        .collect();
    Ok(entries)
}

/// Carry the main worktree's skipped files over to `worktree`. Files missing
/// from its branch are left alone; per-file failures are returned, never
/// fatal.
pub fn propagate(
    repo: &Repo,
    git: &dyn GitPort,
    worktree: &Worktree,
    sink: &mut dyn ProgressSink,
) -> Result<Vec<ItemFailure>> {
    let mut failures = Vec::new();
    for file in flags::flagged_files(git, repo.main())? {
        if !worktree.path.join(&file).exists() {
            sink.on_debug(&format!("'{file}' does not exist in '{}'", worktree.name));
            continue;
        }
        match flags::mark_in(repo, git, worktree, &file) {
            Ok(()) => sink.on_debug(&format!("Skipping '{file}' in '{}'", worktree.name)),
            Err(e) => failures.push(ItemFailure::from_error(file, e)),
        }
    }
    Ok(failures)
}
