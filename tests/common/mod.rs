//! Shared fixtures: throwaway git repositories and helpers to drive the tool
//! against them.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command as StdCommand;
use tempfile::TempDir;
use worktree::cli::Cli;
use worktree::commands::{self, Context};
use worktree::output::TestOutput;
use worktree::settings::Settings;

/// A repository named `app` with one commit on `main`, inside a temporary
/// directory that also receives `.app.worktrees`.
pub struct TestRepo {
    _dir: TempDir,
    base: PathBuf,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().canonicalize().unwrap();
        let root = base.join("app");
        fs::create_dir(&root).unwrap();

        git(&root, &["init", "-q"]);
        git(&root, &["symbolic-ref", "HEAD", "refs/heads/main"]);
        git(&root, &["config", "user.email", "test@example.com"]);
        git(&root, &["config", "user.name", "Test"]);
        git(&root, &["config", "commit.gpgsign", "false"]);

        fs::write(root.join("README.md"), "# app\n").unwrap();
        fs::write(root.join("settings.json"), "{}\n").unwrap();
        git(&root, &["add", "."]);
        git(&root, &["commit", "-q", "-m", "initial"]);

        Self { _dir: dir, base }
    }

    pub fn root(&self) -> PathBuf {
        self.base.join("app")
    }

    pub fn worktrees_dir(&self) -> PathBuf {
        self.base.join(".app.worktrees")
    }

    pub fn worktree(&self, name: &str) -> PathBuf {
        self.worktrees_dir().join(name)
    }

    pub fn branch(&self, name: &str) {
        git(&self.root(), &["branch", name]);
    }

    pub fn write_config(&self, yaml: &str) {
        fs::create_dir_all(self.worktrees_dir()).unwrap();
        fs::write(self.worktrees_dir().join(".config.yml"), yaml).unwrap();
    }

    /// The binary, running in `dir`, with colors and user config out of the way.
    pub fn cmd_in(&self, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin("worktree").unwrap();
        cmd.current_dir(dir)
            .env("NO_COLOR", "1")
            .env("GIT_CONFIG_NOSYSTEM", "1")
            .env("HOME", &self.base);
        cmd
    }

    pub fn cmd(&self) -> Command {
        self.cmd_in(&self.root())
    }

    /// Run a command line through the library in `dir`, capturing output.
    pub fn run_in(&self, dir: &Path, args: &[&str]) -> (anyhow::Result<()>, TestOutput) {
        use clap::Parser;

        let cli = Cli::try_parse_from(std::iter::once("worktree").chain(args.iter().copied()))
            .unwrap();
        let ctx = Context::in_dir(dir, false, Settings::default());
        let mut output = TestOutput::new();
        let result = commands::dispatch(cli.command, &ctx, &mut output);
        (result, output)
    }
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = StdCommand::new("git")
        .current_dir(dir)
        .args(args)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false)
}
