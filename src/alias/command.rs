//! The `alias` built-in

use serde::Serialize;

use super::store::AliasStore;
use crate::config::Alias;
use crate::error::AliasError;

pub const ALIAS_HELP: &str = "Create a new alias or call with no arguments to list current aliases. \
     The format for creating an alias is as follows: ALIAS_NAME .example arg1 $# arg3";

/// What the `alias` built-in did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AliasOutcome {
    /// Listing was requested but nothing is defined
    NoAliases,
    Listed { aliases: Vec<Alias> },
    Created { alias: Alias },
}

/// Run the `alias` built-in on a full command line, keyword included.
///
/// `alias` alone lists every stored alias. `alias NAME COMMAND` stores the
/// single token after the name as the command template; further tokens are
/// ignored.
pub fn run_alias_command(
    store: &dyn AliasStore,
    cmdline: &str,
) -> Result<AliasOutcome, AliasError> {
    let mut parts = cmdline.split(' ');
    let _keyword = parts.next();

    let Some(name) = parts.next() else {
        let aliases = store.list_aliases();
        if aliases.is_empty() {
            return Ok(AliasOutcome::NoAliases);
        }
        return Ok(AliasOutcome::Listed { aliases });
    };

    if name.is_empty() {
        return Err(AliasError::EmptyName);
    }
    let command = parts.next().unwrap_or("");

    store
        .add_alias(name, command)
        .map_err(AliasError::Creation)?;

    Ok(AliasOutcome::Created {
        alias: Alias::new(name, command),
    })
}
