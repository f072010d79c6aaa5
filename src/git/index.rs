use super::GitCommand;
use anyhow::{Context, Result};
use std::path::Path;

impl GitCommand {
    /// `git ls-files --error-unmatch <file>` succeeds only for tracked paths.
    pub fn ls_files_error_unmatch(&self, worktree: &Path, file: &str) -> Result<bool> {
        self.succeeds(Some(worktree), ["ls-files", "--error-unmatch", "--", file])
    }

    /// `git ls-files -v -z`: every tracked path prefixed by its status tag,
    /// NUL-terminated and never quoted.
    pub fn ls_files_verbose(&self, worktree: &Path) -> Result<String> {
        self.run(Some(worktree), ["ls-files", "-v", "-z"])
            .context("Failed to list files")
    }

    pub fn update_index_skip_worktree(&self, worktree: &Path, file: &str, enabled: bool) -> Result<()> {
        let flag = if enabled {
            "--skip-worktree"
        } else {
            "--no-skip-worktree"
        };
        self.run(Some(worktree), ["update-index", flag, "--", file])?;
        Ok(())
    }

    /// Restore `file` in `worktree` from its index (the branch's version).
    pub fn restore(&self, worktree: &Path, file: &str) -> Result<()> {
        self.run(Some(worktree), ["restore", "--", file])?;
        Ok(())
    }
}
