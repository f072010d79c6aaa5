//! Ignored files: like skipped files, but unignoring checks the branch's own
//! version back out with `git restore` instead of copying main's file.

use super::flags::{self, RestoreStrategy};
use crate::core::repo::Repo;
use crate::error::Result;
use crate::git::GitPort;

pub fn ignore(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    flags::mark_everywhere(repo, git, file)
}

pub fn unignore(repo: &Repo, git: &dyn GitPort, file: &str) -> Result<()> {
    flags::unmark_everywhere(repo, git, file, RestoreStrategy::RestoreFromBranch)
}

/// Files ignored in the main worktree, sorted.
pub fn ignored_files(repo: &Repo, git: &dyn GitPort) -> Result<Vec<String>> {
    Ok(flags::flagged_files(git, repo.main())?.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeGit;
    use crate::error::WorktreeError;
    use crate::git::WorktreeRecord;
    use std::fs;

    #[test]
    fn test_ignored_files_lists_main_flags() {
        let git = FakeGit::new("/unused")
            .with_flag("/src/app", "b.txt")
            .with_flag("/src/app", "a.txt")
            .with_flag("/src/.app.worktrees/x", "local.txt");
        let repo = Repo::from_records(
            "/src/app".into(),
            vec![
                WorktreeRecord {
                    path: "/src/app".into(),
                    branch: Some("main".into()),
                },
                WorktreeRecord {
                    path: "/src/.app.worktrees/x".into(),
                    branch: Some("x".into()),
                },
            ],
            "/".as_ref(),
            |p| p.ends_with("app"),
        )
        .unwrap();

        assert_eq!(ignored_files(&repo, &git).unwrap(), vec!["a.txt", "b.txt"]);
    }

    #[test]
    #[cfg(unix)]
    fn test_unignore_reports_file_missing_from_branch() {
        let dir = tempfile::tempdir().unwrap();
        let main = dir.path().join("app");
        let linked = dir.path().join(".app.worktrees/feat");
        fs::create_dir_all(&main).unwrap();
        fs::create_dir_all(&linked).unwrap();
        fs::write(main.join("a.txt"), "main").unwrap();
        std::os::unix::fs::symlink(main.join("a.txt"), linked.join("a.txt")).unwrap();

        let repo = Repo::from_records(
            main.clone(),
            vec![
                WorktreeRecord {
                    path: main.clone(),
                    branch: Some("main".into()),
                },
                WorktreeRecord {
                    path: linked.clone(),
                    branch: Some("feat".into()),
                },
            ],
            &main,
            |p| p == main,
        )
        .unwrap();
        let git = FakeGit::new("/unused").failing_with(
            "restore",
            "git restore failed: error: pathspec 'a.txt' did not match any file(s) known to git",
        );

        let err = unignore(&repo, &git, "a.txt").unwrap_err();
        match err {
            WorktreeError::PartialFailure { failures, .. } => {
                assert_eq!(failures.0[0].item, "feat");
                assert_eq!(failures.0[0].reason, "file does not exist in this branch");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!linked.join("a.txt").exists());
    }
}
