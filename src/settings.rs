//! Git config-based user settings.
//!
//! Per-user preferences are read from git's layered config (local → global)
//! with built-in defaults as fallback. Per-repository behavior (always-copy
//! paths, post-create commands) lives in the YAML file handled by
//! [`crate::config`] instead.
//!
//! # Config Keys
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `worktree.remote` | `"origin"` | Remote searched when `add` finds no local branch |
//! | `worktree.color` | `true` | Colorize `list` output |
//!
//! # Example
//!
//! ```bash
//! git config worktree.remote upstream
//! git config --global worktree.color false
//! ```

use crate::git::GitPort;
use anyhow::Result;

/// Default values for settings.
pub mod defaults {
    pub const REMOTE: &str = "origin";

    pub const COLOR: bool = true;
}

/// Git config keys for settings.
pub mod keys {
    pub const REMOTE: &str = "worktree.remote";

    pub const COLOR: &str = "worktree.color";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Remote consulted for branches that do not exist locally.
    pub remote: String,

    /// Whether colored output is allowed at all.
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            remote: defaults::REMOTE.to_string(),
            color: defaults::COLOR,
        }
    }
}

impl Settings {
    /// Load settings through `git config --get`.
    pub fn load(git: &dyn GitPort) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(value) = git.config_get(keys::REMOTE)? {
            if !value.is_empty() {
                settings.remote = value;
            }
        }

        if let Some(value) = git.config_get(keys::COLOR)? {
            settings.color = parse_bool(&value, defaults::COLOR);
        }

        Ok(settings)
    }
}

/// Parse a git config boolean value.
///
/// Git accepts various boolean representations:
/// - true: `true`, `yes`, `on`, `1`
/// - false: `false`, `no`, `off`, `0`
///
/// Returns the default value if parsing fails.
fn parse_bool(value: &str, default: bool) -> bool {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => true,
        "false" | "no" | "off" | "0" => false,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::FakeGit;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.remote, "origin");
        assert!(settings.color);
    }

    #[test]
    fn test_load_reads_git_config() {
        let mut git = FakeGit::new("/repo/.git");
        git.config
            .insert(keys::REMOTE.to_string(), "upstream".to_string());
        git.config.insert(keys::COLOR.to_string(), "off".to_string());

        let settings = Settings::load(&git).unwrap();
        assert_eq!(settings.remote, "upstream");
        assert!(!settings.color);
    }

    #[test]
    fn test_load_ignores_empty_remote() {
        let mut git = FakeGit::new("/repo/.git");
        git.config.insert(keys::REMOTE.to_string(), String::new());

        assert_eq!(Settings::load(&git).unwrap(), Settings::default());
    }

    #[test]
    fn test_parse_bool_variants() {
        for value in ["true", "Yes", "ON", "1"] {
            assert!(parse_bool(value, false), "{value}");
        }
        for value in ["false", "No", "OFF", "0"] {
            assert!(!parse_bool(value, true), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_invalid_returns_default() {
        assert!(parse_bool("invalid", true));
        assert!(!parse_bool("invalid", false));
        assert!(parse_bool("", true));
    }
}
