//! Command modules for worktree.
//!
//! Each module owns the clap `Args` of one subcommand and a `run` function
//! that drives the core operations and renders their results through the
//! `Output` trait.

use crate::check_dependencies;
use crate::cli::Command;
use crate::config::RepoConfig;
use crate::core::repo::Repo;
use crate::git::GitCommand;
use crate::output::Output;
use crate::settings::Settings;
use anyhow::{Context as _, Result};
use std::path::PathBuf;

pub mod add;
pub mod copy;
pub mod exclude;
pub mod ignore;
pub mod init;
pub mod list;
pub mod new;
pub mod remove;
pub mod skip;
pub mod switch;

/// Everything a command needs besides its arguments: where it runs, how git
/// is invoked, and the user's settings.
pub struct Context {
    pub git: GitCommand,
    pub cwd: PathBuf,
    pub settings: Settings,
}

impl Context {
    /// Context for the process working directory.
    pub fn from_env(verbose: bool, settings: Settings) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to read the current directory")?;
        Ok(Self::in_dir(cwd, verbose, settings))
    }

    /// Context for `cwd`, without touching the process working directory.
    pub fn in_dir(cwd: impl Into<PathBuf>, verbose: bool, settings: Settings) -> Self {
        let cwd = cwd.into();
        Self {
            git: GitCommand::new(verbose).in_dir(&cwd),
            cwd,
            settings,
        }
    }

    /// Discover the repository around the working directory.
    pub fn repo(&self) -> Result<Repo> {
        check_dependencies()?;
        Ok(Repo::discover(&self.git, &self.cwd)?)
    }

    pub fn repo_config(&self, repo: &Repo) -> Result<RepoConfig> {
        Ok(RepoConfig::load(repo)?)
    }
}

pub fn dispatch(command: Command, ctx: &Context, output: &mut dyn Output) -> Result<()> {
    match command {
        Command::Add(args) => add::run(&args, ctx, output),
        Command::New(args) => new::run(&args, ctx, output),
        Command::List(args) => list::run(&args, ctx, output),
        Command::Remove(args) => remove::run(&args, ctx, output),
        Command::Switch(args) => switch::run(&args, ctx, output),
        Command::Copy(args) => copy::run(&args, ctx, output),
        Command::Skip(args) => skip::run(&args, ctx, output),
        Command::Ignore(args) => ignore::run(&args, ctx, output),
        Command::Exclude(args) => exclude::run(&args, ctx, output),
        Command::Init(args) => init::run(&args, output),
    }
}
