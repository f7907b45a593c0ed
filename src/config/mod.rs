//! Configuration for Hostq
//!
//! The configuration is the source of truth for stored aliases, the print
//! mode and the debug switch. It is read from a JSON file; when no file can
//! be loaded the shell falls back to [`Config::builtin`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HostqError, Result};

/// Per-user config file, relative to the home directory
pub const USER_CONFIG_PATH: &str = ".hostq/config.json";

/// System-wide config file used when the user has none
pub const SYSTEM_CONFIG_PATH: &str = "/var/hostq/config.json";

/// A named, reusable command template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    #[serde(default, alias = "Name")]
    pub name: String,

    #[serde(default, alias = "Command")]
    pub command: String,

    #[serde(default, alias = "Description", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Alias {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// How results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintMode {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(alias = "Aliases")]
    pub aliases: BTreeMap<String, Alias>,

    #[serde(alias = "PrintMode")]
    pub print_mode: PrintMode,

    #[serde(alias = "DebugEnabled")]
    pub debug_enabled: bool,
}

impl Config {
    /// Hardcoded defaults used when no config file is available
    pub fn builtin() -> Self {
        let mut aliases = BTreeMap::new();
        aliases.insert(
            ".all".to_string(),
            Alias::new(".all", ".query select * from $#")
                .with_description("Select everything from a table"),
        );

        Self {
            aliases,
            print_mode: PrintMode::Pretty,
            debug_enabled: false,
        }
    }

    /// Parse a config from JSON text.
    ///
    /// The map key is the alias name; any `name` field inside an entry is
    /// overwritten with it.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut config: Config = serde_json::from_str(text)?;
        for (key, alias) in config.aliases.iter_mut() {
            alias.name = key.clone();
        }
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> std::result::Result<(), crate::error::StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Pick the config file to load.
///
/// An explicit override always wins. Otherwise the per-user file is used if
/// it exists, and the system-wide path if it does not.
pub fn resolve_config_path(override_path: Option<&Path>) -> PathBuf {
    if let Some(path) = override_path {
        return path.to_path_buf();
    }

    match dirs::home_dir().map(|home| home.join(USER_CONFIG_PATH)) {
        Some(user_path) if user_path.exists() => user_path,
        _ => PathBuf::from(SYSTEM_CONFIG_PATH),
    }
}

/// Read and parse a config file
pub fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| HostqError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Config::from_json(&text).map_err(|e| HostqError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_has_all_alias() {
        let config = Config::builtin();
        let alias = config.aliases.get(".all").unwrap();
        assert_eq!(alias.name, ".all");
        assert_eq!(alias.command, ".query select * from $#");
        assert_eq!(alias.description.as_deref(), Some("Select everything from a table"));
        assert_eq!(config.print_mode, PrintMode::Pretty);
    }

    #[test]
    fn test_from_json_takes_name_from_key() {
        let config = Config::from_json(
            r#"{"aliases": {".v": {"command": "show version"}}}"#,
        )
        .unwrap();
        assert_eq!(config.aliases[".v"].name, ".v");
        assert_eq!(config.aliases[".v"].command, "show version");
    }

    #[test]
    fn test_from_json_accepts_pascal_case_keys() {
        let config = Config::from_json(
            r#"{
                "PrintMode": "json",
                "DebugEnabled": true,
                "Aliases": {
                    ".all": {"Description": "everything", "Command": "select * from $#"}
                }
            }"#,
        )
        .unwrap();
        assert_eq!(config.print_mode, PrintMode::Json);
        assert!(config.debug_enabled);
        assert_eq!(config.aliases[".all"].description.as_deref(), Some("everything"));
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let config = Config::from_json("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_json_rejects_unknown_print_mode() {
        assert!(Config::from_json(r#"{"print_mode": "sparkly"}"#).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = Config::builtin();
        config.save(&path).unwrap();

        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, HostqError::Config { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_config(&path), Err(HostqError::Config { .. })));
    }

    #[test]
    fn test_resolve_override_wins() {
        let path = resolve_config_path(Some(Path::new("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_resolve_without_override_is_user_or_system() {
        let path = resolve_config_path(None);
        assert!(path.ends_with(USER_CONFIG_PATH) || path == Path::new(SYSTEM_CONFIG_PATH));
    }
}
