//! REPL module for interactive mode

pub mod completion;
pub mod dispatch;

#[cfg(feature = "repl")]
pub mod interactive;

pub use completion::complete_line;
pub use dispatch::{dispatch_line, parse_builtin, Builtin, Dispatch};

#[cfg(feature = "repl")]
pub use interactive::run_repl;

#[cfg(not(feature = "repl"))]
pub fn run_repl(
    _store: std::sync::Arc<crate::alias::ConfigStore>,
    _format: crate::output::OutputFormat,
) -> crate::error::Result<()> {
    Err(crate::error::HostqError::Repl(
        "REPL not enabled. Rebuild with --features repl".to_string(),
    ))
}
