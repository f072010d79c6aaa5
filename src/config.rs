//! Per-repository configuration stored as YAML in the worktrees directory.
//!
//! ```yaml
//! copy:
//!   - .env
//!   - config/local
//! commands:
//!   - npm install
//! deleteBranchWithWorktree: true
//! ```
//!
//! Every field is optional. A missing file is the default configuration; a
//! file that does not parse is an error, never silently ignored.

use crate::core::repo::Repo;
use crate::error::{Result, WorktreeError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepoConfig {
    /// Paths copied into every newly created worktree, relative to its root.
    pub copy: Vec<String>,

    /// Shell commands run inside every newly created worktree.
    pub commands: Vec<String>,

    /// Delete the branch when its worktree is removed.
    #[serde(rename = "deleteBranchWithWorktree")]
    pub delete_branch_with_worktree: bool,
}

impl RepoConfig {
    pub fn load(repo: &Repo) -> Result<Self> {
        Self::load_from(&repo.config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(WorktreeError::io(
                    format!("failed to read config file {}", path.display()),
                    e,
                ))
            }
        };

        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| WorktreeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    pub fn save(&self, repo: &Repo) -> Result<()> {
        repo.ensure_worktrees_dir()?;
        self.save_to(&repo.config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_yaml::to_string(self).map_err(|e| WorktreeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        fs::write(path, contents).map_err(|e| {
            WorktreeError::io(format!("failed to write config file {}", path.display()), e)
        })
    }

    /// Append `path` to the always-copy list and persist the file.
    pub fn add_copy_path(&mut self, repo: &Repo, path: &str) -> Result<()> {
        if self.copy.iter().any(|p| p == path) {
            return Err(WorktreeError::AlreadyListed {
                item: path.to_string(),
                list: "always-copy list",
            });
        }
        self.copy.push(path.to_string());
        self.save(repo)
    }

    /// Drop `path` from the always-copy list and persist the file.
    pub fn remove_copy_path(&mut self, repo: &Repo, path: &str) -> Result<()> {
        let Some(index) = self.copy.iter().position(|p| p == path) else {
            return Err(WorktreeError::NotListed {
                item: path.to_string(),
                list: "always-copy list",
            });
        };
        self.copy.remove(index);
        self.save(repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::WorktreeRecord;
    use std::path::PathBuf;

    fn repo_in(dir: &Path) -> Repo {
        let root = dir.join("app");
        Repo::from_records(
            root.clone(),
            vec![WorktreeRecord {
                path: root.clone(),
                branch: Some("main".into()),
            }],
            &root,
            |_| true,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = RepoConfig::load_from(&dir.path().join("nope.yml")).unwrap();
        assert_eq!(config, RepoConfig::default());
        assert!(!config.delete_branch_with_worktree);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".config.yml");
        fs::write(&path, "commands:\n  - npm install\n").unwrap();

        let config = RepoConfig::load_from(&path).unwrap();
        assert_eq!(config.commands, vec!["npm install"]);
        assert!(config.copy.is_empty());
        assert!(!config.delete_branch_with_worktree);
    }

    #[test]
    fn test_reads_camel_case_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".config.yml");
        fs::write(&path, "copy: [.env]\ndeleteBranchWithWorktree: true\n").unwrap();

        let config = RepoConfig::load_from(&path).unwrap();
        assert_eq!(config.copy, vec![".env"]);
        assert!(config.delete_branch_with_worktree);
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".config.yml");
        fs::write(&path, "copy: {not: [a list").unwrap();

        let err = RepoConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, WorktreeError::Config { path: p, .. } if p == path));
    }

    #[test]
    fn test_add_and_remove_copy_path_persist() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(dir.path());

        let mut config = RepoConfig::default();
        config.add_copy_path(&repo, ".env").unwrap();
        config.add_copy_path(&repo, "config/local").unwrap();

        let written = fs::read_to_string(repo.config_path()).unwrap();
        assert!(written.contains("deleteBranchWithWorktree: false"), "{written}");

        let reloaded = RepoConfig::load(&repo).unwrap();
        assert_eq!(reloaded.copy, vec![".env", "config/local"]);

        config.remove_copy_path(&repo, ".env").unwrap();
        assert_eq!(RepoConfig::load(&repo).unwrap().copy, vec!["config/local"]);
    }

    #[test]
    fn test_duplicate_and_missing_copy_paths_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(dir.path());
        let mut config = RepoConfig::default();
        config.add_copy_path(&repo, ".env").unwrap();

        assert!(matches!(
            config.add_copy_path(&repo, ".env"),
            Err(WorktreeError::AlreadyListed { .. })
        ));
        assert!(matches!(
            config.remove_copy_path(&repo, "other"),
            Err(WorktreeError::NotListed { .. })
        ));
        assert_eq!(config.copy, vec![".env"]);
    }

    #[test]
    fn test_save_creates_worktrees_dir() {
        let dir = tempfile::tempdir().unwrap();
        let repo = repo_in(dir.path());
        RepoConfig::default().save(&repo).unwrap();
        assert!(PathBuf::from(dir.path()).join(".app.worktrees/.config.yml").is_file());
    }
}
