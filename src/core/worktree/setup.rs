//! Post-create setup applied to every newly created worktree.
//!
//! Setup never fails the creation: the worktree already exists and is
//! usable, so every problem surfaces as a warning.

use super::copy;
use crate::config::RepoConfig;
use crate::core::repo::{Repo, Worktree};
use crate::core::{skip, ProgressSink, Stream};
use crate::git::GitPort;
use anyhow::{Context, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

/// Propagate skipped files, copy always-copy paths, then run the configured
/// post-create commands.
pub fn run(
    repo: &Repo,
    git: &dyn GitPort,
    config: &RepoConfig,
    worktree: &Worktree,
    sink: &mut dyn ProgressSink,
) {
    match skip::propagate(repo, git, worktree, sink) {
        Ok(failures) => {
            for failure in failures {
                sink.on_warning(&format!(
                    "failed to skip '{}': {}",
                    failure.item, failure.reason
                ));
            }
        }
        Err(e) => sink.on_warning(&format!("failed to apply skip settings: {e}")),
    }

    if !config.copy.is_empty() {
        sink.on_step(&format!(
            "Copying {} always-copy path(s)",
            config.copy.len()
        ));
        if let Err(e) = copy::apply_always_copy(repo, config, worktree) {
            sink.on_warning(&format!("failed to apply always-copy: {e}"));
        }
    }

    if let Err(e) = run_commands(&config.commands, &worktree.path, sink) {
        sink.on_warning(&format!("failed to run post-create commands: {e:#}"));
    }
}

/// Run each command with `sh -c` inside `dir`, forwarding its output line by
/// line. Stops at the first command that exits unsuccessfully.
pub fn run_commands(commands: &[String], dir: &Path, sink: &mut dyn ProgressSink) -> Result<()> {
    if commands.is_empty() {
        return Ok(());
    }

    sink.on_info("Running post-create commands...");
    for (i, cmd) in commands.iter().enumerate() {
        sink.on_info(&format!("  [{}/{}] {cmd}", i + 1, commands.len()));
        run_command(cmd, dir, sink).with_context(|| format!("command {} failed", i + 1))?;
    }
    Ok(())
}

fn run_command(cmd: &str, dir: &Path, sink: &mut dyn ProgressSink) -> Result<()> {
    let mut child = Command::new("sh")
        .args(["-c", cmd])
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to spawn: {cmd}"))?;

    // Drain both pipes at once so a child filling one of them never blocks.
    let (tx, rx) = mpsc::channel();
    let readers = [
        child.stdout.take().map(|out| forward_lines(out, Stream::Stdout, tx.clone())),
        child.stderr.take().map(|err| forward_lines(err, Stream::Stderr, tx.clone())),
    ];
    drop(tx);

    for (stream, line) in rx {
        sink.on_command_output(stream, &line);
    }
    for reader in readers.into_iter().flatten() {
        reader.join().ok();
    }

    let status = child
        .wait()
        .with_context(|| format!("failed to wait for: {cmd}"))?;
    if !status.success() {
        anyhow::bail!("{cmd}: {status}");
    }
    Ok(())
}

fn forward_lines<R: Read + Send + 'static>(
    source: R,
    stream: Stream,
    tx: Sender<(Stream, String)>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        for line in BufReader::new(source).lines().map_while(Result::ok) {
            if tx.send((stream, line)).is_err() {
                break;
            }
        }
    })
}
