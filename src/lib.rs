//! Hostq - an interactive shell for querying remote hosts
//!
//! Frequently issued commands can be saved as aliases. An alias command may
//! contain `$#` placeholders which are filled, in order, by the arguments
//! given when the alias is invoked.
//!
//! # Example
//!
//! ```
//! use hostq::{dispatch_line, AliasStore, Config, ConfigStore, Dispatch};
//!
//! let store = ConfigStore::in_memory(Config::default());
//! store.add_alias(".all", "select * from $#").unwrap();
//!
//! let result = dispatch_line(&store, ".all users").unwrap();
//! assert_eq!(
//!     result,
//!     Dispatch::Expanded { alias: ".all".into(), command: "select * from users".into() }
//! );
//! ```

pub mod alias;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use alias::{interpolate_arguments, run_alias_command, AliasOutcome, AliasStore, ConfigStore};
pub use config::{load_config, resolve_config_path, Alias, Config, PrintMode};
pub use error::{AliasError, HostqError, Result, StoreError};
pub use output::{format_output, OutputFormat};
pub use repl::{dispatch_line, Dispatch};
