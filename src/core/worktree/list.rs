//! Core logic for the `list` command.
//!
//! Produces the rows shown by `worktree list`, either as human-readable lines
//! or as serializable entries for `--json`.

use crate::core::repo::{Repo, Worktree};
use crate::styles;
use serde::Serialize;

/// How a row is flagged in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Main,
    Current,
    None,
}

impl Marker {
    /// The main marker wins when the process runs inside the main worktree.
    pub fn of(repo: &Repo, worktree: &Worktree) -> Self {
        if repo.is_main(worktree) {
            Marker::Main
        } else if repo.is_current(worktree) {
            Marker::Current
        } else {
            Marker::None
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            Marker::Main => "> ",
            Marker::Current => "* ",
            Marker::None => "  ",
        }
    }
}

/// `name`, followed by the branch in brackets when it differs from the name.
pub fn label(worktree: &Worktree) -> String {
    if worktree.is_detached() {
        format!("{} [detached]", worktree.name)
    } else if worktree.branch != worktree.name {
        format!("{} [{}]", worktree.name, worktree.branch)
    } else {
        worktree.name.clone()
    }
}

/// One human-readable listing row.
pub fn display_line(repo: &Repo, worktree: &Worktree, color: bool) -> String {
    let marker = Marker::of(repo, worktree);
    let line = format!("{}{}", marker.prefix(), label(worktree));
    match marker {
        Marker::Main => styles::paint(&line, styles::CYAN, color),
        Marker::Current => styles::paint(&line, styles::GREEN, color),
        Marker::None => line,
    }
}

/// A listing row as emitted by `list --json`.
#[derive(Debug, Serialize)]
pub struct ListEntry<'a> {
    #[serde(flatten)]
    pub worktree: &'a Worktree,
    pub main: bool,
    pub current: bool,
}

/// Every worktree, main first, the rest sorted by name.
pub fn entries(repo: &Repo) -> Vec<ListEntry<'_>> {
    repo.sorted()
        .into_iter()
        .map(|worktree| ListEntry {
            worktree,
            main: repo.is_main(worktree),
            current: repo.is_current(worktree),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::WorktreeRecord;
    use std::path::{Path, PathBuf};

    fn repo(cwd: &str) -> Repo {
        let record = |path: &str, branch: Option<&str>| WorktreeRecord {
            path: path.into(),
            branch: branch.map(String::from),
        };
        Repo::from_records(
            PathBuf::from("/src/app"),
            vec![
                record("/src/app", Some("main")),
                record("/src/.app.worktrees/zeta", Some("zeta")),
                record("/src/.app.worktrees/alpha", Some("feature/alpha")),
                record("/src/.app.worktrees/loose", None),
            ],
            Path::new(cwd),
            |p| p == Path::new("/src/app"),
        )
        .unwrap()
    }

    #[test]
    fn test_label_variants() {
        let repo = repo("/");
        assert_eq!(label(repo.lookup("zeta").unwrap()), "zeta");
        assert_eq!(label(repo.lookup("alpha").unwrap()), "alpha [feature/alpha]");
        assert_eq!(label(repo.lookup("loose").unwrap()), "loose [detached]");
    }

    #[test]
    fn test_markers() {
        let repo = repo("/src/.app.worktrees/zeta/src");
        assert_eq!(Marker::of(&repo, repo.main()), Marker::Main);
        assert_eq!(
            Marker::of(&repo, repo.lookup("zeta").unwrap()),
            Marker::Current
        );
        assert_eq!(Marker::of(&repo, repo.lookup("alpha").unwrap()), Marker::None);
    }

    #[test]
    fn test_main_marker_wins_over_current() {
        let repo = repo("/src/app");
        assert!(repo.is_current(repo.main()));
        assert_eq!(display_line(&repo, repo.main(), false), "> app [main]");
    }

    #[test]
    fn test_display_lines_plain_and_colored() {
        let repo = repo("/src/.app.worktrees/zeta");
        assert_eq!(
            display_line(&repo, repo.lookup("zeta").unwrap(), false),
            "* zeta"
        );
        assert_eq!(
            display_line(&repo, repo.lookup("alpha").unwrap(), true),
            "  alpha [feature/alpha]"
        );
        assert_eq!(
            display_line(&repo, repo.lookup("zeta").unwrap(), true),
            "\x1b[32m* zeta\x1b[0m"
        );
    }

    #[test]
    fn test_entries_order_and_json_shape() {
        let repo = repo("/src/.app.worktrees/alpha");
        let entries = entries(&repo);
        let names: Vec<&str> = entries.iter().map(|e| e.worktree.name.as_str()).collect();
        assert_eq!(names, vec!["app", "alpha", "loose", "zeta"]);

        let json = serde_json::to_value(&entries).unwrap();
        assert_eq!(json[0]["main"], true);
        assert_eq!(json[0]["current"], false);
        assert_eq!(json[1]["name"], "alpha");
        assert_eq!(json[1]["branch"], "feature/alpha");
        assert_eq!(json[1]["path"], "/src/.app.worktrees/alpha");
        assert_eq!(json[1]["current"], true);
        assert!(json[1].get("remoteBranch").is_none());
    }
}
