//! Repository registry: the main worktree, every linked worktree, and which
//! one the process is running inside.
//!
//! Linked worktrees live in a sibling directory of the repository root named
//! `.<repo-name>.worktrees`, which also holds the per-repository config file.

use crate::error::{Result, WorktreeError};
use crate::git::{GitPort, WorktreeRecord};
use crate::CONFIG_FILE_NAME;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One checked-out worktree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Worktree {
    /// The identifier users type: the name given at creation, otherwise the
    /// final path segment.
    pub name: String,
    /// Checked-out branch, empty when HEAD is detached.
    pub branch: String,
    pub path: PathBuf,
    /// `<remote>/<branch>` when the worktree was created from a remote branch.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_branch: Option<String>,
}

impl Worktree {
    pub fn new(path: impl Into<PathBuf>, branch: impl Into<String>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            branch: branch.into(),
            path,
            remote_branch: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_remote_branch(mut self, remote_branch: impl Into<String>) -> Self {
        self.remote_branch = Some(remote_branch.into());
        self
    }

    pub fn is_detached(&self) -> bool {
        self.branch.is_empty()
    }
}

impl From<WorktreeRecord> for Worktree {
    fn from(record: WorktreeRecord) -> Self {
        Worktree::new(record.path, record.branch.unwrap_or_default())
    }
}

/// Snapshot of a repository's worktrees.
///
/// `main` and `current` index into `worktrees`; every mutation keeps them
/// pointing at the same entries.
#[derive(Debug, Clone)]
pub struct Repo {
    name: String,
    root: PathBuf,
    worktrees_dir: PathBuf,
    worktrees: Vec<Worktree>,
    main: usize,
    current: Option<usize>,
}

impl Repo {
    /// Discover the repository enclosing `cwd`.
    ///
    /// `git` must run in `cwd` too: a relative common directory is resolved
    /// against it.
    pub fn discover(git: &dyn GitPort, cwd: &Path) -> Result<Self> {
        let common_dir = git
            .git_common_dir()
            .map_err(WorktreeError::NotARepository)?;
        let common_dir = if common_dir.is_absolute() {
            common_dir
        } else {
            cwd.join(common_dir)
        };
        let common_dir = common_dir.canonicalize().unwrap_or(common_dir);

        let root = common_dir
            .parent()
            .ok_or_else(|| {
                WorktreeError::NotARepository(anyhow::anyhow!(
                    "git common directory has no parent: {}",
                    common_dir.display()
                ))
            })?
            .to_path_buf();

        let records = git.list_worktrees()?;
        let cwd = cwd.canonicalize().unwrap_or_else(|_| cwd.to_path_buf());
        Self::from_records(root, records, &cwd, |path| path.join(".git").is_dir())
    }

    /// Build a registry from parsed worktree records.
    ///
    /// The main worktree is the first record for which `is_main` holds (on
    /// disk: the one whose `.git` is a directory rather than a file).
    pub fn from_records(
        root: PathBuf,
        records: Vec<WorktreeRecord>,
        cwd: &Path,
        is_main: impl Fn(&Path) -> bool,
    ) -> Result<Self> {
        let name = root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let worktrees_dir = root
            .parent()
            .unwrap_or(&root)
            .join(format!(".{name}.worktrees"));

        let worktrees: Vec<Worktree> = records.into_iter().map(Worktree::from).collect();
        let main = worktrees
            .iter()
            .position(|wt| is_main(&wt.path))
            .ok_or(WorktreeError::NoMainWorktree)?;
        let current = worktrees.iter().position(|wt| cwd.starts_with(&wt.path));

        Ok(Self {
            name,
            root,
            worktrees_dir,
            worktrees,
            main,
            current,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directory containing the git common directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn worktrees_dir(&self) -> &Path {
        &self.worktrees_dir
    }

    pub fn config_path(&self) -> PathBuf {
        self.worktrees_dir.join(CONFIG_FILE_NAME)
    }

    /// Where a linked worktree named `name` lives.
    pub fn worktree_path(&self, name: &str) -> PathBuf {
        self.worktrees_dir.join(name)
    }

    /// Every worktree, in the order git lists them.
    pub fn worktrees(&self) -> &[Worktree] {
        &self.worktrees
    }

    pub fn main(&self) -> &Worktree {
        &self.worktrees[self.main]
    }

    /// The worktree containing the working directory, if any.
    pub fn current(&self) -> Option<&Worktree> {
        self.current.map(|i| &self.worktrees[i])
    }

    pub fn is_main(&self, worktree: &Worktree) -> bool {
        worktree.path == self.main().path
    }

    pub fn is_current(&self, worktree: &Worktree) -> bool {
        self.current()
            .is_some_and(|current| current.path == worktree.path)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Worktree> {
        self.worktrees.iter().find(|wt| wt.name == name)
    }

    pub fn find_by_branch(&self, branch: &str) -> Option<&Worktree> {
        if branch.is_empty() {
            return None;
        }
        self.worktrees.iter().find(|wt| wt.branch == branch)
    }

    /// Whether creating a worktree called `name` would clash with an
    /// existing one, either by path or by its final segment.
    pub fn name_taken(&self, name: &str) -> bool {
        let path = self.worktree_path(name);
        let segment = Worktree::new(&path, "").name;
        self.worktrees
            .iter()
            .any(|wt| wt.path == path || wt.name == segment)
    }

    /// Resolve a user-supplied identifier: a worktree name first, then a
    /// branch name.
    pub fn lookup(&self, identifier: &str) -> Result<&Worktree> {
        self.find_by_name(identifier)
            .or_else(|| self.find_by_branch(identifier))
            .ok_or_else(|| WorktreeError::WorktreeNotFound(identifier.to_string()))
    }

    /// Worktrees with the main one first and the rest sorted by name.
    pub fn sorted(&self) -> Vec<&Worktree> {
        let mut others: Vec<&Worktree> = self
            .worktrees
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.main)
            .map(|(_, wt)| wt)
            .collect();
        others.sort_by(|a, b| a.name.cmp(&b.name));

        let mut sorted = Vec::with_capacity(self.worktrees.len());
        sorted.push(self.main());
        sorted.extend(others);
        sorted
    }

    /// Create the worktrees directory if it does not exist yet.
    pub fn ensure_worktrees_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.worktrees_dir).map_err(|e| {
            WorktreeError::io(
                format!(
                    "failed to create worktrees directory {}",
                    self.worktrees_dir.display()
                ),
                e,
            )
        })
    }

    pub(crate) fn insert(&mut self, worktree: Worktree) {
        self.worktrees.push(worktree);
    }

    /// Drop the entry at `path`. The main worktree is never dropped.
    pub(crate) fn remove(&mut self, path: &Path) -> Option<Worktree> {
        let index = self.worktrees.iter().position(|wt| wt.path == path)?;
        if index == self.main {
            return None;
        }

        let removed = self.worktrees.remove(index);
        if self.main > index {
            self.main -= 1;
        }
        self.current = match self.current {
            Some(i) if i == index => None,
            Some(i) if i > index => Some(i - 1),
            other => other,
        };
        Some(removed)
    }
}
