use std::path::Path;

use serde::Deserialize;

use crate::Result;

#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Messages must start with this prefix to be treated as commands.
    pub command_prefix: String,
    pub database_path: String,
    /// User IDs that may toggle the group switch regardless of their
    /// permissions in the group.
    pub operators: Vec<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command_prefix: String::from("."),
            database_path: String::from("dicer.sqlite"),
            operators: Vec::new(),
        }
    }
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load("does-not-exist.toml").unwrap();
        assert_eq!(config.command_prefix, ".");
        assert_eq!(config.database_path, "dicer.sqlite");
        assert!(config.operators.is_empty());
    }

    #[test]
    fn keys_are_kebab_case_and_optional() {
        let config: Config =
            toml::from_str("command-prefix = \"!\"\noperators = [1, 2]").unwrap();
        assert_eq!(config.command_prefix, "!");
        assert_eq!(config.database_path, "dicer.sqlite");
        assert_eq!(config.operators, vec![1, 2]);
    }
}
