//! Patterns in the main worktree's `.git/info/exclude`.
//!
//! Edits are line based: comments and blank lines are kept as they are, and
//! only lines whose trimmed text equals the pattern are added or dropped.

use crate::core::repo::Repo;
use crate::error::{Result, WorktreeError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const LIST: &str = "exclude list";

/// The exclude file of one repository.
#[derive(Debug, Clone)]
pub struct ExcludeFile {
    path: PathBuf,
}

impl ExcludeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_repo(repo: &Repo) -> Self {
        Self::new(repo.main().path.join(".git").join("info").join("exclude"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                WorktreeError::ExcludeFileMissing(self.path.clone())
            } else {
                WorktreeError::io(
                    format!("failed to read exclude file {}", self.path.display()),
                    e,
                )
            }
        })
    }

    fn write(&self, contents: &str) -> Result<()> {
        // Truncating the existing file keeps its permissions.
        fs::write(&self.path, contents).map_err(|e| {
            WorktreeError::io(
                format!("failed to write exclude file {}", self.path.display()),
                e,
            )
        })
    }

    /// Append `pattern` on its own line. The file must already exist.
    pub fn add(&self, pattern: &str) -> Result<()> {
        let mut contents = self.read()?;
        if contents.lines().any(|line| line.trim() == pattern) {
            return Err(WorktreeError::AlreadyListed {
                item: pattern.to_string(),
                list: LIST,
            });
        }

        if !contents.is_empty() && !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push_str(pattern);
        contents.push('\n');
        self.write(&contents)
    }

    /// Drop every line matching `pattern`.
    pub fn remove(&self, pattern: &str) -> Result<()> {
        let contents = self.read()?;
        let kept: Vec<&str> = contents
            .split('\n')
            .filter(|line| line.trim() != pattern)
            .collect();

        if kept.len() == contents.split('\n').count() {
            return Err(WorktreeError::NotListed {
                item: pattern.to_string(),
                list: LIST,
            });
        }
        self.write(&kept.join("\n"))
    }

    /// Active patterns, skipping comments and blank lines. A missing file has
    /// no patterns.
    pub fn patterns(&self) -> Result<Vec<String>> {
        let contents = match self.read() {
            Ok(contents) => contents,
            Err(WorktreeError::ExcludeFileMissing(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect())
    }
}
