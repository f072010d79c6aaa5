//! worktree - Git worktree manager
//!
//! Parses the command line, decides output settings once, and hands off to
//! the matching command.
use clap::Parser;
use worktree::cli::Cli;
use worktree::commands::{self, Context};
use worktree::git::GitCommand;
use worktree::output::{CliOutput, Output, OutputConfig};
use worktree::settings::Settings;
use worktree::styles;

fn main() {
    let cli = Cli::parse();

    let settings = Settings::load(&GitCommand::new(false)).unwrap_or_default();
    let config = OutputConfig::new(
        cli.verbose,
        styles::color_enabled(cli.no_color, settings.color),
    );
    let color_stderr = styles::color_enabled_stderr(cli.no_color, settings.color);
    let mut output = CliOutput::new(config, color_stderr);

    let result = Context::from_env(cli.verbose, settings)
        .and_then(|ctx| commands::dispatch(cli.command, &ctx, &mut output));

    if let Err(e) = result {
        output.error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
