use crate::error::{Result, WorktreeError};
use std::path::{Component, Path};

/// Check that a user-supplied worktree name stays inside the worktrees
/// directory once joined onto it.
///
/// Names may contain `/` (a branch like `feature/login` becomes a nested
/// directory); the worktree is then known by its final segment.
pub fn validate_worktree_name(name: &str) -> Result<()> {
    let invalid = |reason| {
        Err(WorktreeError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return invalid("name cannot be empty");
    }

    // Security: control characters and zero-width characters
    if name.chars().any(|c| {
        c.is_control() || matches!(c, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{FEFF}')
    }) {
        return invalid("name contains control characters");
    }

    let path = Path::new(name);
    if path.is_absolute() || name.starts_with('/') {
        return invalid("name cannot be an absolute path");
    }

    // Security: path traversal
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => return invalid("name cannot contain '..'"),
            Component::RootDir | Component::Prefix(_) => {
                return invalid("name cannot be an absolute path")
            }
        }
    }

    if path.file_name().is_none() {
        return invalid("name must end in a directory name");
    }

    Ok(())
}
