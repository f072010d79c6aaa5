mod common;

use common::{git, TestRepo};
use predicates::prelude::*;
use std::fs;

#[test]
fn test_new_creates_worktree_and_emits_cd_signal() {
    let repo = TestRepo::new();
    let expected = repo.worktree("feat");

    repo.cmd()
        .args(["new", "feat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Worktree created: 'feat'"))
        .stdout(predicate::str::contains(format!(
            "__WORKTREE_CD__{}",
            expected.display()
        )));

    assert!(expected.join("README.md").is_file());
    let branch = git(&expected, &["rev-parse", "--abbrev-ref", "HEAD"]);
    assert_eq!(branch.trim(), "feat");
}

#[test]
fn test_new_refuses_existing_branch() {
    let repo = TestRepo::new();
    repo.branch("feat");

    repo.cmd()
        .args(["new", "feat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "error: branch 'feat' already exists, use 'add' instead",
        ));
    assert!(!repo.worktree("feat").exists());
}

#[test]
fn test_add_existing_branch_with_custom_name() {
    let repo = TestRepo::new();
    repo.branch("feature/login");

    let (result, output) = repo.run_in(&repo.root(), &["add", "feature/login", "login"]);
    result.unwrap();

    assert!(output.has_result("Worktree created: 'login'"));
    assert_eq!(output.get_cd_path(), Some(&repo.worktree("login")));
    assert!(repo.worktree("login").join("README.md").is_file());
}

#[test]
fn test_add_redirects_to_existing_worktree() {
    let repo = TestRepo::new();
    repo.branch("feat");
    repo.run_in(&repo.root(), &["add", "feat"]).0.unwrap();

    let (result, output) = repo.run_in(&repo.root(), &["add", "feat", "again"]);
    result.unwrap();

    assert!(output.has_info("already exists for branch 'feat'"));
    assert_eq!(output.get_cd_path(), Some(&repo.worktree("feat")));
    assert!(!repo.worktree("again").exists());
}

#[test]
fn test_add_unknown_branch_fails() {
    let repo = TestRepo::new();

    let (result, _) = repo.run_in(&repo.root(), &["add", "ghost"]);
    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("branch 'ghost' does not exist locally or on remote 'origin'"));
    assert!(!repo.worktrees_dir().exists());
}

#[test]
fn test_list_marks_main_and_current() {
    let repo = TestRepo::new();
    repo.run_in(&repo.root(), &["new", "zeta"]).0.unwrap();
    repo.run_in(&repo.root(), &["new", "feature/alpha"]).0.unwrap();

    let (result, output) = repo.run_in(&repo.worktree("zeta"), &["list"]);
    result.unwrap();

    assert_eq!(
        output.list_items(),
        vec!["> app [main]", "  alpha [feature/alpha]", "* zeta"]
    );
}

#[test]
fn test_list_json() {
    let repo = TestRepo::new();
    repo.run_in(&repo.root(), &["new", "feat"]).0.unwrap();

    let assert = repo.cmd().args(["list", "--json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json[0]["name"], "app");
    assert_eq!(json[0]["main"], true);
    assert_eq!(json[0]["current"], true);
    assert_eq!(json[1]["name"], "feat");
    assert_eq!(json[1]["branch"], "feat");
    assert_eq!(json[1]["main"], false);
}

#[test]
fn test_switch_by_branch_and_to_main() {
    let repo = TestRepo::new();
    repo.branch("feature/login");
    repo.run_in(&repo.root(), &["add", "feature/login", "login"])
        .0
        .unwrap();

    let (result, output) = repo.run_in(&repo.root(), &["switch", "feature/login"]);
    result.unwrap();
    assert_eq!(output.get_cd_path(), Some(&repo.worktree("login")));

    let (result, output) = repo.run_in(&repo.worktree("login"), &["switch"]);
    result.unwrap();
    assert_eq!(output.get_cd_path(), Some(&repo.root()));

    let (result, _) = repo.run_in(&repo.root(), &["switch", "nope"]);
    assert!(result.unwrap_err().to_string().contains("no worktree found: 'nope'"));
}

#[test]
fn test_remove_main_is_refused() {
    let repo = TestRepo::new();

    repo.cmd()
        .arg("remove")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "cannot remove the main worktree (contains .git directory)",
        ));
    assert!(repo.root().join(".git").is_dir());
}

#[test]
fn test_remove_current_worktree_returns_to_main() {
    let repo = TestRepo::new();
    repo.run_in(&repo.root(), &["new", "feat"]).0.unwrap();
    fs::write(repo.worktree("feat").join("dirty.txt"), "wip").unwrap();

    repo.cmd_in(&repo.worktree("feat"))
        .arg("rm")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 worktree(s): feat"))
        .stdout(predicate::str::contains(format!(
            "__WORKTREE_CD__{}",
            repo.root().display()
        )));

    assert!(!repo.worktree("feat").exists());
    // The branch survives without -D.
    git(&repo.root(), &["rev-parse", "--verify", "feat"]);
}

#[test]
fn test_remove_current_worktree_with_force_deletes_its_branch() {
    let repo = TestRepo::new();
    repo.run_in(&repo.root(), &["new", "feat"]).0.unwrap();

    repo.cmd_in(&repo.worktree("feat"))
        .args(["rm", "-D"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 worktree(s): feat"))
        .stdout(predicate::str::contains(format!(
            "__WORKTREE_CD__{}",
            repo.root().display()
        )));

    assert!(!repo.worktree("feat").exists());
    assert!(git(&repo.root(), &["branch", "--list", "feat"])
        .trim()
        .is_empty());
}

#[test]
fn test_remove_current_worktree_honors_delete_branch_setting() {
    let repo = TestRepo::new();
    repo.write_config("deleteBranchWithWorktree: true\n");
    repo.run_in(&repo.root(), &["new", "feat"]).0.unwrap();

    repo.cmd_in(&repo.worktree("feat"))
        .arg("remove")
        .assert()
        .success();

    assert!(!repo.worktree("feat").exists());
    assert!(git(&repo.root(), &["branch", "--list", "feat"])
        .trim()
        .is_empty());
}

#[test]
fn test_remove_with_force_deletes_branch_and_reports_unknown_targets() {
    let repo = TestRepo::new();
    repo.run_in(&repo.root(), &["new", "one"]).0.unwrap();
    repo.run_in(&repo.root(), &["new", "two"]).0.unwrap();

    let (result, output) = repo.run_in(&repo.root(), &["remove", "one", "ghost", "two", "-D"]);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.starts_with("failed to remove 1 worktree(s):"));
    assert!(message.contains("  ghost: no worktree found: 'ghost'"));
    assert!(output.has_result("Removed 2 worktree(s): one, two"));
    assert!(output.get_cd_path().is_none());

    let branches = git(&repo.root(), &["branch", "--list", "one", "two"]);
    assert!(branches.trim().is_empty());
}

#[test]
fn test_post_create_commands_failure_is_a_warning() {
    let repo = TestRepo::new();
    repo.write_config("commands:\n  - echo hi\n  - \"false\"\n  - echo never\n");

    repo.cmd()
        .args(["new", "feat"])
        .assert()
        .success()
        .stdout(predicate::str::contains("> hi"))
        .stdout(predicate::str::contains("never").not())
        .stdout(predicate::str::contains("Worktree created: 'feat'"))
        .stderr(predicate::str::contains(
            "warning: failed to run post-create commands: command 2 failed",
        ));

    assert!(repo.worktree("feat").is_dir());
}

#[test]
fn test_always_copy_paths_reach_new_worktrees() {
    let repo = TestRepo::new();
    fs::write(repo.root().join(".env"), "SECRET=1\n").unwrap();

    let (result, output) = repo.run_in(&repo.root(), &["copy", "--always", ".env"]);
    result.unwrap();
    assert!(output.has_result("Added '.env' to always-copy list"));

    let (_, output) = repo.run_in(&repo.root(), &["copy", "--always"]);
    assert_eq!(output.list_items(), vec![".env"]);

    repo.run_in(&repo.root(), &["new", "feat"]).0.unwrap();
    assert_eq!(
        fs::read_to_string(repo.worktree("feat").join(".env")).unwrap(),
        "SECRET=1\n"
    );

    let (result, _) = repo.run_in(&repo.root(), &["copy", "--always", ".env"]);
    assert!(result.unwrap_err().to_string().contains("already in the always-copy list"));

    repo.run_in(&repo.root(), &["copy", "--always-rm", ".env"])
        .0
        .unwrap();
    let (_, output) = repo.run_in(&repo.root(), &["copy", "--always"]);
    assert!(output.has_info("No always-copy paths configured"));
}

#[test]
fn test_copy_into_current_worktree() {
    let repo = TestRepo::new();
    repo.run_in(&repo.root(), &["new", "feat"]).0.unwrap();
    fs::create_dir_all(repo.root().join("config/local")).unwrap();
    fs::write(repo.root().join("config/local/db.yml"), "db: dev\n").unwrap();

    let (result, _) = repo.run_in(&repo.worktree("feat"), &["copy", "config", "conf"]);
    result.unwrap();
    assert_eq!(
        fs::read_to_string(repo.worktree("feat").join("conf/local/db.yml")).unwrap(),
        "db: dev\n"
    );

    let (result, _) = repo.run_in(&repo.root(), &["copy", "README.md"]);
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("cannot copy from worktree to itself"));
}
