//! Terminal text styling utilities.
//!
//! Provides clean abstractions for ANSI terminal styling, keeping escape codes
//! isolated from application code. Whether styling is applied at all is
//! decided once per invocation (see [`color_enabled`]) and passed down
//! explicitly.

use std::env;

/// ANSI escape code for bold text.
pub const BOLD: &str = "\x1b[1m";

/// ANSI escape code for dimmed text.
pub const DIM: &str = "\x1b[2m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// ANSI escape code to reset all styling.
pub const RESET: &str = "\x1b[0m";

/// Wraps `text` in `style` when `enabled`, otherwise returns it unchanged.
pub fn paint(text: &str, style: &str, enabled: bool) -> String {
    if enabled {
        format!("{style}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Decide whether output may be colored.
///
/// Color is off when requested on the command line, when `NO_COLOR` is set,
/// when the `worktree.color` setting is false, or when stdout is not a
/// terminal.
pub fn color_enabled(no_color_flag: bool, setting: bool) -> bool {
    if no_color_flag || !setting || env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled()
}

/// Same as [`color_enabled`], for output written to stderr.
pub fn color_enabled_stderr(no_color_flag: bool, setting: bool) -> bool {
    if no_color_flag || !setting || env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::colors_enabled_stderr()
}
