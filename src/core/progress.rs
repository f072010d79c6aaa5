//! Adapter bridging the core progress trait to the command layer.

use super::{ProgressSink, Stream};
use crate::output::Output;

/// Adapter that forwards `ProgressSink` calls to an `Output` implementation.
///
/// # Example
///
/// ```ignore
/// let mut output = CliOutput::new(config, color_stderr);
/// let mut sink = OutputSink(&mut output);
/// core::worktree::new::execute(&mut repo, &git, &config, &params, &mut sink)?;
/// ```
pub struct OutputSink<'a>(pub &'a mut dyn Output);

impl ProgressSink for OutputSink<'_> {
    fn on_step(&mut self, msg: &str) {
        self.0.step(msg);
    }

    fn on_info(&mut self, msg: &str) {
        self.0.info(msg);
    }

    fn on_warning(&mut self, msg: &str) {
        self.0.warning(msg);
    }

    fn on_debug(&mut self, msg: &str) {
        self.0.debug(msg);
    }

    fn on_command_output(&mut self, stream: Stream, line: &str) {
        self.0.command_output(stream, line);
    }
}
