//! Output abstraction layer for separating IO from business logic.
//!
//! Commands accept `&mut dyn Output` and use its methods instead of direct
//! `println!` or `eprintln!` calls:
//!
//! ```ignore
//! pub fn run(args: &Args, ctx: &Context, output: &mut dyn Output) -> Result<()> {
//!     output.step("Creating worktree");
//!     output.result("Worktree created: 'feat'");
//!     output.cd_path(&path);
//!     Ok(())
//! }
//! ```

mod cli;

pub use cli::CliOutput;
pub use test::{OutputEntry, TestOutput};

use crate::core::Stream;
use std::path::Path;

/// Configuration for output behavior, decided once per invocation.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Show steps and debug messages.
    pub verbose: bool,
    /// Style output with ANSI colors.
    pub color: bool,
}

impl OutputConfig {
    pub fn new(verbose: bool, color: bool) -> Self {
        Self { verbose, color }
    }
}

/// Trait for abstracting output operations.
///
/// Separates output concerns from business logic so the CLI writes to the
/// terminal while tests capture structured entries.
pub trait Output {
    // ─────────────────────────────────────────────────────────────────────────
    // Basic Messages
    // ─────────────────────────────────────────────────────────────────────────

    /// Display an informational message.
    fn info(&mut self, msg: &str);

    /// Display a warning message to stderr.
    fn warning(&mut self, msg: &str);

    /// Display an error message to stderr.
    fn error(&mut self, msg: &str);

    /// Display a debug message. Only shown in verbose mode.
    fn debug(&mut self, msg: &str);

    // ─────────────────────────────────────────────────────────────────────────
    // Structured Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Display an intermediate step message. Only shown in verbose mode.
    fn step(&mut self, msg: &str);

    /// Display the final result of a command.
    fn result(&mut self, msg: &str);

    /// Display one entry of a listing.
    fn list_item(&mut self, item: &str);

    /// Relay a line written by a post-create command.
    fn command_output(&mut self, stream: Stream, line: &str);

    // ─────────────────────────────────────────────────────────────────────────
    // Special Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Ask the shell wrapper to change directory to `path`.
    fn cd_path(&mut self, path: &Path);

    /// Output raw, unformatted content such as JSON.
    fn raw(&mut self, content: &str);

    // ─────────────────────────────────────────────────────────────────────────
    // State Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether display code may use ANSI colors.
    fn color(&self) -> bool;
}
