//! CLI output implementation.

use super::{Output, OutputConfig};
use crate::core::Stream;
use crate::styles;
use std::path::Path;

/// CLI output implementation that writes directly to stdout/stderr.
///
/// Git-like output format:
/// - `step()` → verbose only, no prefix
/// - `result()` → primary output, always shown
/// - `warning()` → `eprintln!("warning: {msg}")`
/// - `error()` → `eprintln!("error: {msg}")`
/// - `command_output()` → `> line` on the stream the command used
#[derive(Debug)]
pub struct CliOutput {
    config: OutputConfig,
    color_stderr: bool,
}

impl CliOutput {
    /// `color_stderr` is decided separately since stderr may be a terminal
    /// while stdout is piped.
    pub fn new(config: OutputConfig, color_stderr: bool) -> Self {
        Self {
            config,
            color_stderr,
        }
    }

    fn paint(&self, msg: &str, style: &str) -> String {
        styles::paint(msg, style, self.config.color)
    }

    fn prefix(&self, label: &str, style: &str) -> String {
        styles::paint(&format!("{label}:"), style, self.color_stderr)
    }
}

impl Output for CliOutput {
    fn info(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{} {msg}", self.prefix("warning", styles::YELLOW));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{} {msg}", self.prefix("error", styles::RED));
    }

    fn debug(&mut self, msg: &str) {
        if self.config.verbose {
            eprintln!("{}", self.paint(&format!("debug: {msg}"), styles::DIM));
        }
    }

    fn step(&mut self, msg: &str) {
        if self.config.verbose {
            println!("{}", self.paint(msg, styles::DIM));
        }
    }

    fn result(&mut self, msg: &str) {
        println!("{}", self.paint(msg, styles::BOLD));
    }

    fn list_item(&mut self, item: &str) {
        println!("{item}");
    }

    fn command_output(&mut self, stream: Stream, line: &str) {
        match stream {
            Stream::Stdout => println!("> {line}"),
            Stream::Stderr => eprintln!("> {line}"),
        }
    }

    fn cd_path(&mut self, path: &Path) {
        println!("{}", crate::cd_line(path));
    }

    fn raw(&mut self, content: &str) {
        print!("{content}");
    }

    fn color(&self) -> bool {
        self.config.color
    }
}
