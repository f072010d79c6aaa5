//! Core logic for the `new` command.
//!
//! Creates a worktree together with a brand-new branch.

use super::setup;
use crate::config::RepoConfig;
use crate::core::repo::{Repo, Worktree};
use crate::core::ProgressSink;
use crate::error::{Result, WorktreeError};
use crate::git::GitPort;
use crate::utils::validate_worktree_name;

/// Input parameters for the new operation.
pub struct NewParams {
    /// Branch to create.
    pub branch: String,
    /// Worktree name (path below the worktrees directory).
    pub name: String,
}

pub fn execute(
    repo: &mut Repo,
    git: &dyn GitPort,
    config: &RepoConfig,
    params: &NewParams,
    sink: &mut dyn ProgressSink,
) -> Result<Worktree> {
    if git.ref_exists(&params.branch)? {
        return Err(WorktreeError::BranchExists(params.branch.clone()));
    }
    if repo.name_taken(&params.name) {
        return Err(WorktreeError::NameTaken(params.name.clone()));
    }
    validate_worktree_name(&params.name)?;

    repo.ensure_worktrees_dir()?;

    let path = repo.worktree_path(&params.name);
    sink.on_step(&format!(
        "Creating worktree at '{}' with new branch '{}'",
        path.display(),
        params.branch
    ));
    git.worktree_add_new_branch(&path, &params.branch)?;

    let worktree = Worktree::new(path, &params.branch).with_name(&params.name);
    repo.insert(worktree.clone());
    setup::run(repo, git, config, &worktree, sink);
    Ok(worktree)
}
