//! Core business logic.
//!
//! Operations in this module report progress through [`ProgressSink`] rather
//! than writing to the terminal, so the same code runs under the CLI and
//! under tests.

pub mod exclude;
mod flags;
pub mod ignore;
mod progress;
pub mod repo;
pub mod skip;
pub mod worktree;

pub use flags::RestoreStrategy;
pub use progress::OutputSink;

// ─────────────────────────────────────────────────────────────────────────
// Progress reporting
// ─────────────────────────────────────────────────────────────────────────

/// Which stream a line of post-create command output was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// Trait for core operations to report progress without depending on `Output`.
///
/// Commands create an adapter (`OutputSink`) that bridges this trait to the
/// actual output implementation. Tests can use `NullSink` to suppress all
/// output, or wrap a `TestOutput` to capture it.
pub trait ProgressSink {
    /// Report an intermediate step (shown in verbose mode).
    fn on_step(&mut self, msg: &str);

    /// Report an informational message (always shown).
    fn on_info(&mut self, msg: &str);

    /// Report a warning (always shown).
    fn on_warning(&mut self, msg: &str);

    /// Report a debug message (shown in verbose mode).
    fn on_debug(&mut self, msg: &str);

    /// Forward one line printed by a post-create command.
    fn on_command_output(&mut self, stream: Stream, line: &str);
}

/// A no-op sink that discards all progress messages.
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_step(&mut self, _msg: &str) {}
    fn on_info(&mut self, _msg: &str) {}
    fn on_warning(&mut self, _msg: &str) {}
    fn on_debug(&mut self, _msg: &str) {}
    fn on_command_output(&mut self, _stream: Stream, _line: &str) {}
}
