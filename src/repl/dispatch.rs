//! Routing of a single input line
//!
//! A line is either the `alias` built-in, an invocation of a stored alias,
//! or something for the query layer to handle untouched.

use tracing::debug;

use crate::alias::{interpolate_arguments, run_alias_command, AliasOutcome, AliasStore};
use crate::error::AliasError;

/// Keyword of the alias built-in
pub const ALIAS_KEYWORD: &str = "alias";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The `alias` built-in ran
    Alias(AliasOutcome),
    /// A stored alias was expanded into a query command
    Expanded { alias: String, command: String },
    /// Not an alias; hand to the query layer as typed
    Passthrough(String),
}

/// REPL commands handled before alias dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Exit,
    Help,
    Clear,
}

/// Recognise a REPL built-in. Surrounding whitespace is ignored here only;
/// alias lines reach [`dispatch_line`] untrimmed.
pub fn parse_builtin(line: &str) -> Option<Builtin> {
    match line.trim() {
        "exit" | "quit" => Some(Builtin::Exit),
        "help" | "?" => Some(Builtin::Help),
        "clear" | "cls" => Some(Builtin::Clear),
        _ => None,
    }
}

pub fn dispatch_line(store: &dyn AliasStore, line: &str) -> Result<Dispatch, AliasError> {
    let first = line.split(' ').next().unwrap_or_default();

    if first == ALIAS_KEYWORD {
        return run_alias_command(store, line).map(Dispatch::Alias);
    }

    match store.find_alias(first) {
        Some(alias) => {
            let command = interpolate_arguments(line, &alias.command)?;
            debug!(alias = %alias.name, %command, "expanded alias");
            Ok(Dispatch::Expanded {
                alias: alias.name,
                command,
            })
        }
        None => Ok(Dispatch::Passthrough(line.to_string())),
    }
}
