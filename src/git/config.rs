use super::GitCommand;
use anyhow::Result;

impl GitCommand {
    /// Get a git config value from the current repository (respects local + global config)
    pub fn config_get(&self, key: &str) -> Result<Option<String>> {
        // Exit code 1 means the key was not found, which is not an error
        let value = self.try_run(None, ["config", "--get", key])?;
        Ok(value.map(|v| v.trim().to_string()))
    }
}
