use super::GitCommand;
use anyhow::Result;
use std::path::PathBuf;

impl GitCommand {
    /// Get the Git common directory path, exactly as git prints it.
    pub fn rev_parse_git_common_dir(&self) -> Result<PathBuf> {
        let output = self.run(None, ["rev-parse", "--git-common-dir"])?;
        let path = output.lines().next().unwrap_or_default().trim();
        if path.is_empty() {
            anyhow::bail!("git rev-parse returned an empty common directory");
        }
        Ok(PathBuf::from(path))
    }

    /// Whether `rev` names an existing object (branch, remote branch, tag, sha).
    pub fn rev_parse_verify(&self, rev: &str) -> Result<bool> {
        self.succeeds(None, ["rev-parse", "--verify", "--quiet", rev])
    }
}
