use super::GitCommand;
use anyhow::{Context, Result};
use std::ffi::OsStr;
use std::path::Path;

impl GitCommand {
    pub fn worktree_add(&self, path: &Path, branch: &str) -> Result<()> {
        self.run(
            None,
            [OsStr::new("worktree"), OsStr::new("add"), path.as_os_str(), OsStr::new(branch)],
        )
        .context("Failed to create worktree")?;
        Ok(())
    }

    /// Create `branch` from `start_point` (typically `<remote>/<branch>`),
    /// which also sets it up to track that remote branch.
    pub fn worktree_add_tracking(&self, path: &Path, branch: &str, start_point: &str) -> Result<()> {
        self.run(
            None,
            [
                OsStr::new("worktree"),
                OsStr::new("add"),
                OsStr::new("-b"),
                OsStr::new(branch),
                path.as_os_str(),
                OsStr::new(start_point),
            ],
        )
        .context("Failed to create worktree")?;
        Ok(())
    }

    pub fn worktree_add_new_branch(&self, path: &Path, branch: &str) -> Result<()> {
        self.run(
            None,
            [
                OsStr::new("worktree"),
                OsStr::new("add"),
                OsStr::new("-b"),
                OsStr::new(branch),
                path.as_os_str(),
            ],
        )
        .context("Failed to create worktree")?;
        Ok(())
    }

    pub fn worktree_remove(&self, from: &Path, path: &Path, force: bool) -> Result<()> {
        let mut args = vec![OsStr::new("worktree"), OsStr::new("remove"), path.as_os_str()];
        if force {
            args.push(OsStr::new("--force"));
        }
        self.run(Some(from), args)
            .context("Failed to remove worktree")?;
        Ok(())
    }

    pub fn worktree_list_porcelain(&self) -> Result<String> {
        self.run(None, ["worktree", "list", "--porcelain"])
            .context("Failed to list worktrees")
    }

    pub fn branch_delete(&self, from: &Path, branch: &str, force: bool) -> Result<()> {
        let flag = if force { "-D" } else { "-d" };
        self.run(Some(from), ["branch", flag, branch])
            .with_context(|| format!("Failed to delete branch '{branch}'"))?;
        Ok(())
    }
}
