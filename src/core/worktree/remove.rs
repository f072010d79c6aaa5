//! Core logic for the `remove` command.

use crate::config::RepoConfig;
use crate::core::repo::{Repo, Worktree};
use crate::core::ProgressSink;
use crate::error::{Result, WorktreeError};
use crate::git::GitPort;
use anyhow::Context;

/// Remove `target`, discarding uncommitted changes, then delete its branch
/// when `force_delete_branch` is set or the config asks for it.
///
/// The main worktree is refused before git is touched.
pub fn execute(
    repo: &mut Repo,
    git: &dyn GitPort,
    config: &RepoConfig,
    target: &Worktree,
    force_delete_branch: bool,
    sink: &mut dyn ProgressSink,
) -> Result<Worktree> {
    if repo.is_main(target) {
        return Err(WorktreeError::ProtectedResource { action: "remove" });
    }

    let main_path = repo.main().path.clone();

    sink.on_step(&format!("Removing worktree at '{}'", target.path.display()));
    git.worktree_remove(&main_path, &target.path, true)?;
    let removed = repo.remove(&target.path).unwrap_or_else(|| target.clone());

    if force_delete_branch || config.delete_branch_with_worktree {
        if removed.is_detached() {
            sink.on_warning(&format!(
                "worktree '{}' had no branch checked out; nothing to delete",
                removed.name
            ));
        } else {
            // The branch is only free once its worktree is gone.
            sink.on_step(&format!("Deleting branch '{}'", removed.branch));
            git.branch_delete(&main_path, &removed.branch, true)
                .with_context(|| format!("failed to force delete branch '{}'", removed.branch))?;
        }
    }

    Ok(removed)
}
