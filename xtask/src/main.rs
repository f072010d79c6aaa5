//! xtask - Development automation tasks for worktree
//!
//! This binary provides development-time tasks that don't need to be
//! included in the distributed binary.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development automation tasks for worktree")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate man pages for worktree and its subcommands
    GenMan {
        /// Output directory for man pages
        #[arg(long, default_value = "man")]
        output_dir: PathBuf,

        /// Specific subcommand to generate a man page for (default: all)
        #[arg(long)]
        command: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenMan {
            output_dir,
            command,
        } => generate_man_pages(&output_dir, command.as_deref()),
    }
}

/// Page name and clap definition of every documented command: the tool
/// itself plus each visible subcommand as `worktree-<name>`.
fn man_commands() -> Vec<(String, clap::Command)> {
    let root = worktree::cli::Cli::command()
        .version(worktree::VERSION)
        .name("worktree");

    let mut pages: Vec<(String, clap::Command)> = root
        .get_subcommands()
        .filter(|sub| !sub.is_hide_set())
        .map(|sub| {
            let name = format!("worktree-{}", sub.get_name());
            (name.clone(), sub.clone().name(name))
        })
        .collect();
    pages.insert(0, ("worktree".to_string(), root));
    pages
}

/// Generate man pages and write to a directory
fn generate_man_pages(output_dir: &Path, command: Option<&str>) -> Result<()> {
    fs::create_dir_all(output_dir).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_dir.display()
        )
    })?;

    let mut pages = man_commands();
    if let Some(wanted) = command {
        let page = if wanted == "worktree" {
            wanted.to_string()
        } else {
            format!("worktree-{wanted}")
        };
        pages.retain(|(name, _)| *name == page);
        if pages.is_empty() {
            anyhow::bail!("Unknown command: {wanted}");
        }
    }

    for (name, cmd) in pages {
        let man = Man::new(cmd);
        let mut buffer = Vec::new();
        man.render(&mut buffer)?;

        let file_path = output_dir.join(format!("{name}.1"));
        fs::write(&file_path, &buffer)
            .with_context(|| format!("Failed to write man page: {}", file_path.display()))?;

        eprintln!("Generated: {}", file_path.display());
    }

    eprintln!("\nMan pages generated in: {}", output_dir.display());
    Ok(())
}
