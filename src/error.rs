//! Error taxonomy for worktree operations.
//!
//! Core operations return [`WorktreeError`] so callers can branch on the
//! kind of failure (for example, redirecting to an existing worktree on
//! [`WorktreeError::AlreadyExists`]). The command layer converts everything
//! into `anyhow::Error` at the boundary.

use crate::core::repo::Worktree;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One failed item inside a multi-item operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// The file, pattern, worktree or path the failure belongs to.
    pub item: String,
    /// Human-readable reason.
    pub reason: String,
}

impl ItemFailure {
    pub fn new(item: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self {
            item: item.into(),
            reason: reason.to_string(),
        }
    }

    /// Failure whose reason is the full cause chain of `error`.
    pub fn from_error(item: impl Into<String>, error: impl Into<anyhow::Error>) -> Self {
        Self::new(item, format!("{:#}", error.into()))
    }
}

/// A list of per-item failures, rendered one indented line per item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Failures(pub Vec<ItemFailure>);

impl Failures {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Failures {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, failure) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            // Nested multi-line reasons stay indented under their item.
            let reason = failure.reason.replace('\n', "\n  ");
            write!(f, "  {}: {}", failure.item, reason)?;
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum WorktreeError {
    #[error("not in a git repository")]
    NotARepository(#[source] anyhow::Error),

    #[error("no main worktree found (no worktree contains a .git directory)")]
    NoMainWorktree,

    #[error("no worktree found: '{0}'")]
    WorktreeNotFound(String),

    #[error("worktree already exists: {0}")]
    NameTaken(String),

    /// A worktree is already checked out on the requested branch.
    #[error("worktree already exists for branch '{}' at: {}", .existing.branch, .existing.path.display())]
    AlreadyExists { existing: Worktree },

    #[error("branch '{0}' already exists, use 'add' instead")]
    BranchExists(String),

    #[error("branch '{branch}' does not exist locally or on remote '{remote}'")]
    BranchNotFound { branch: String, remote: String },

    #[error("cannot {action} the main worktree (contains .git directory)")]
    ProtectedResource { action: &'static str },

    #[error("not currently in a worktree")]
    NotInWorktree,

    /// Some items of a multi-item operation failed; the rest were processed.
    #[error("{summary}:\n{failures}")]
    PartialFailure { summary: String, failures: Failures },

    #[error("'{item}' is already in the {list}")]
    AlreadyListed { item: String, list: &'static str },

    #[error("'{item}' is not in the {list}")]
    NotListed { item: String, list: &'static str },

    #[error("exclude file does not exist: {}", .0.display())]
    ExcludeFileMissing(PathBuf),

    #[error("cannot copy from worktree to itself")]
    SelfCopy,

    #[error("invalid worktree name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid config file {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("{context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Git(#[from] anyhow::Error),
}

impl WorktreeError {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Build a `PartialFailure`, or `Ok(())` when nothing failed.
    /// `summary` receives the number of failed items.
    pub fn check_partial(
        failures: Vec<ItemFailure>,
        summary: impl FnOnce(usize) -> String,
    ) -> Result<()> {
        if failures.is_empty() {
            Ok(())
        } else {
            Err(Self::PartialFailure {
                summary: summary(failures.len()),
                failures: Failures(failures),
            })
        }
    }
}

pub type Result<T> = std::result::Result<T, WorktreeError>;
