//! Completion candidates built from stored aliases

use serde::Serialize;

use super::store::AliasStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub text: String,
    pub description: String,
}

/// One suggestion per stored alias, read fresh from the store on each call
pub fn suggest_aliases(store: &dyn AliasStore) -> Vec<Suggestion> {
    store
        .list_aliases()
        .into_iter()
        .map(|alias| {
            let description = match alias.description {
                Some(description) if !description.is_empty() => description,
                _ => alias.command,
            };
            Suggestion {
                text: alias.name,
                description,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::store::ConfigStore;
    use crate::config::Config;

    #[test]
    fn test_empty_store_has_no_suggestions() {
        let store = ConfigStore::in_memory(Config::default());
        assert!(suggest_aliases(&store).is_empty());
    }

    #[test]
    fn test_prefers_description_over_command() {
        let store = ConfigStore::in_memory(Config::builtin());
        store.add_alias(".v", "show version").unwrap();

        let suggestions = suggest_aliases(&store);
        assert_eq!(
            suggestions,
            vec![
                Suggestion {
                    text: ".all".to_string(),
                    description: "Select everything from a table".to_string(),
                },
                Suggestion {
                    text: ".v".to_string(),
                    description: "show version".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_reflects_live_store() {
        let store = ConfigStore::in_memory(Config::default());
        assert_eq!(suggest_aliases(&store).len(), 0);

        store.add_alias(".a", "a").unwrap();
        assert_eq!(suggest_aliases(&store).len(), 1);
    }
}
