//! Parsers for git's plain-text output.

use std::path::PathBuf;

/// One entry of `git worktree list --porcelain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorktreeRecord {
    pub path: PathBuf,
    /// Short branch name; `None` for detached or bare entries.
    pub branch: Option<String>,
}

/// Parse the porcelain output of `git worktree list --porcelain`.
///
/// Records are separated by blank lines:
/// ```text
/// worktree /path/to/worktree
/// HEAD <sha>
/// branch refs/heads/branch-name
/// ```
/// Detached entries carry `detached` instead of a `branch` line.
pub fn parse_worktree_list(output: &str) -> Vec<WorktreeRecord> {
    let mut records = Vec::new();
    let mut current: Option<WorktreeRecord> = None;

    for line in output.lines() {
        if let Some(path) = line.strip_prefix("worktree ") {
            if let Some(record) = current.take() {
                records.push(record);
            }
            current = Some(WorktreeRecord {
                path: PathBuf::from(path),
                branch: None,
            });
        } else if let Some(branch_ref) = line.strip_prefix("branch ") {
            if let Some(record) = current.as_mut() {
                let branch = branch_ref.strip_prefix("refs/heads/").unwrap_or(branch_ref);
                record.branch = Some(branch.to_string());
            }
        } else if line.is_empty() {
            if let Some(record) = current.take() {
                records.push(record);
            }
        }
    }

    if let Some(record) = current.take() {
        records.push(record);
    }

    records
}

/// Status letter `git ls-files -v` prints for skip-worktree entries.
pub const SKIP_WORKTREE_TAG: char = 'S';

/// Extract the paths flagged skip-worktree from `git ls-files -v -z` output.
/// Entries are NUL-terminated, so paths arrive unquoted.
pub fn parse_skip_worktree(output: &str) -> Vec<String> {
    output
        .split('\0')
        .filter_map(|line| {
            let rest = line.strip_prefix(SKIP_WORKTREE_TAG)?;
            rest.strip_prefix(' ').map(String::from)
        })
        .collect()
}
