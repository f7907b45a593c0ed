//! Alias store backed by the shell configuration
//!
//! [`ConfigStore`] owns the [`Config`] and hands out copies of aliases, never
//! references into the map. It is shared between the REPL loop and the
//! completion helper, so access goes through an `RwLock`.

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::config::{Alias, Config};
use crate::error::StoreError;

/// Storage for named aliases
pub trait AliasStore {
    /// Insert or replace the alias under `name`
    fn add_alias(&self, name: &str, command: &str) -> Result<(), StoreError>;

    /// All aliases, ordered by name
    fn list_aliases(&self) -> Vec<Alias>;

    /// Exact, case-sensitive lookup
    fn find_alias(&self, name: &str) -> Option<Alias>;
}

#[derive(Debug)]
pub struct ConfigStore {
    config: RwLock<Config>,
    /// Config file that receives every change, if any
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store that only lives in memory
    pub fn in_memory(config: Config) -> Self {
        Self {
            config: RwLock::new(config),
            path: None,
        }
    }

    /// Store that writes every change back to `path`
    pub fn persistent(config: Config, path: impl Into<PathBuf>) -> Self {
        Self {
            config: RwLock::new(config),
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Snapshot of the whole configuration
    pub fn config(&self) -> Config {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AliasStore for ConfigStore {
    fn add_alias(&self, name: &str, command: &str) -> Result<(), StoreError> {
        let mut config = self
            .config
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let previous = config
            .aliases
            .insert(name.to_string(), Alias::new(name, command));

        if let Some(path) = &self.path {
            if let Err(e) = config.save(path) {
                // Keep memory and disk in agreement
                match previous {
                    Some(alias) => config.aliases.insert(name.to_string(), alias),
                    None => config.aliases.remove(name),
                };
                return Err(e);
            }
            debug!(alias = name, path = %path.display(), "persisted alias");
        }

        debug!(alias = name, command, replaced = previous.is_some(), "stored alias");
        Ok(())
    }

    fn list_aliases(&self) -> Vec<Alias> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .aliases
            .values()
            .cloned()
            .collect()
    }

    fn find_alias(&self, name: &str) -> Option<Alias> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .aliases
            .get(name)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use tempfile::TempDir;

    #[test]
    fn test_add_then_find_round_trip() {
        let store = ConfigStore::in_memory(Config::default());
        store.add_alias(".q", "select $# from $#").unwrap();

        let alias = store.find_alias(".q").unwrap();
        assert_eq!(alias.name, ".q");
        assert_eq!(alias.command, "select $# from $#");
    }

    #[test]
    fn test_redefinition_overwrites() {
        let store = ConfigStore::in_memory(Config::builtin());
        store.add_alias(".all", "select name from $#").unwrap();

        let alias = store.find_alias(".all").unwrap();
        assert_eq!(alias.command, "select name from $#");
        assert!(alias.description.is_none());
        assert_eq!(store.list_aliases().len(), 1);
    }

    #[test]
    fn test_find_is_exact_and_case_sensitive() {
        let store = ConfigStore::in_memory(Config::builtin());
        assert!(store.find_alias(".all").is_some());
        assert!(store.find_alias(".ALL").is_none());
        assert!(store.find_alias(".al").is_none());
        assert!(store.find_alias(".all ").is_none());
        assert!(store.find_alias("").is_none());
    }

    #[test]
    fn test_list_empty_store() {
        let store = ConfigStore::in_memory(Config::default());
        assert!(store.list_aliases().is_empty());
    }

    #[test]
    fn test_list_is_ordered_by_name() {
        let store = ConfigStore::in_memory(Config::default());
        store.add_alias(".z", "z").unwrap();
        store.add_alias(".a", "a").unwrap();
        store.add_alias(".m", "m").unwrap();

        let names: Vec<String> = store.list_aliases().into_iter().map(|a| a.name).collect();
        assert_eq!(names, vec![".a", ".m", ".z"]);
    }

    #[test]
    fn test_returned_alias_is_a_copy() {
        let store = ConfigStore::in_memory(Config::builtin());
        let mut alias = store.find_alias(".all").unwrap();
        alias.command.clear();

        assert_eq!(store.find_alias(".all").unwrap().command, ".query select * from $#");
    }

    #[test]
    fn test_persistent_store_writes_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        let store = ConfigStore::persistent(Config::default(), &path);

        store.add_alias(".v", "show version").unwrap();

        let on_disk = load_config(&path).unwrap();
        assert_eq!(on_disk.aliases[".v"].command, "show version");
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let temp_dir = TempDir::new().unwrap();
        // A directory cannot be written as a file
        let store = ConfigStore::persistent(Config::builtin(), temp_dir.path());

        let err = store.add_alias(".new", "x").unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(store.find_alias(".new").is_none());

        store.add_alias(".all", "changed").unwrap_err();
        assert_eq!(store.find_alias(".all").unwrap().command, ".query select * from $#");
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(ConfigStore::in_memory(Config::default()));
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || store.add_alias(&format!(".a{}", i), "x").unwrap())
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.list_aliases().len(), 4);
    }
}
