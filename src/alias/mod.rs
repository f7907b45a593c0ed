//! Alias subsystem: storage, lookup and placeholder expansion

pub mod command;
pub mod interpolate;
pub mod store;
pub mod suggest;

pub use command::{run_alias_command, AliasOutcome, ALIAS_HELP};
pub use interpolate::{interpolate_arguments, placeholder_count, PLACEHOLDER};
pub use store::{AliasStore, ConfigStore};
pub use suggest::{suggest_aliases, Suggestion};
