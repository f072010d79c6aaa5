//! Core logic for the `add` command.
//!
//! Creates a worktree for a branch that already exists, locally or on the
//! configured remote.

use super::setup;
use crate::config::RepoConfig;
use crate::core::repo::{Repo, Worktree};
use crate::core::ProgressSink;
use crate::error::{Result, WorktreeError};
use crate::git::GitPort;
use crate::utils::validate_worktree_name;

/// Input parameters for the add operation.
pub struct AddParams {
    /// Existing branch to check out.
    pub branch: String,
    /// Worktree name (path below the worktrees directory).
    pub name: String,
    /// Remote searched when the branch does not exist locally.
    pub remote: String,
}

/// Execute the add operation and return the new worktree.
///
/// Fails with [`WorktreeError::AlreadyExists`] when a worktree is already on
/// `branch`, so callers can switch to it instead.
pub fn execute(
    repo: &mut Repo,
    git: &dyn GitPort,
    config: &RepoConfig,
    params: &AddParams,
    sink: &mut dyn ProgressSink,
) -> Result<Worktree> {
    if repo.name_taken(&params.name) {
        return Err(WorktreeError::NameTaken(params.name.clone()));
    }
    if let Some(existing) = repo.find_by_branch(&params.branch) {
        return Err(WorktreeError::AlreadyExists {
            existing: existing.clone(),
        });
    }
    validate_worktree_name(&params.name)?;

    let path = repo.worktree_path(&params.name);
    let remote_ref = format!("{}/{}", params.remote, params.branch);

    let tracking = if git.ref_exists(&params.branch)? {
        false
    } else if git.ref_exists(&remote_ref)? {
        true
    } else {
        return Err(WorktreeError::BranchNotFound {
            branch: params.branch.clone(),
            remote: params.remote.clone(),
        });
    };

    repo.ensure_worktrees_dir()?;

    let mut worktree = Worktree::new(&path, &params.branch).with_name(&params.name);
    if tracking {
        sink.on_step(&format!(
            "Creating worktree at '{}' tracking '{remote_ref}'",
            path.display()
        ));
        git.worktree_add_tracking(&path, &params.branch, &remote_ref)?;
        worktree = worktree.with_remote_branch(remote_ref);
    } else {
        sink.on_step(&format!(
            "Creating worktree at '{}' for branch '{}'",
            path.display(),
            params.branch
        ));
        git.worktree_add(&path, &params.branch)?;
    }

    repo.insert(worktree.clone());
    setup::run(repo, git, config, &worktree, sink);
    Ok(worktree)
}
