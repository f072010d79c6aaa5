use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_init_bash_prints_wrapper_and_completions() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("worktree")
        .unwrap()
        .current_dir(dir.path())
        .args(["init", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# worktree shell setup"))
        .stdout(predicate::str::contains("wrk() {"))
        .stdout(predicate::str::contains("__WORKTREE_CD__"))
        .stdout(predicate::str::contains("complete -o default -F _worktree wrk"));
}

#[test]
fn test_init_rejects_unknown_shell() {
    Command::cargo_bin("worktree")
        .unwrap()
        .args(["init", "tcsh"])
        .assert()
        .failure();
}

#[test]
fn test_init_is_hidden_from_help() {
    Command::cargo_bin("worktree")
        .unwrap()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("switch"))
        .stdout(predicate::str::contains("init").not());
}

#[test]
fn test_outside_repository_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("worktree")
        .unwrap()
        .current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: not in a git repository"));
}
