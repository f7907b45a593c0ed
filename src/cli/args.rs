//! CLI argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hostq")]
#[command(author, version, about = "Query remote hosts from an interactive shell", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: SubCommand,

    /// Config file to use instead of ~/.hostq/config.json
    #[arg(long, global = true, env = "HOSTQ_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum SubCommand {
    /// Start interactive REPL mode
    Repl,

    /// List all aliases
    Aliases,

    /// Create or replace an alias
    Alias {
        /// Name used to invoke the alias
        name: String,

        /// Command template; each $# is filled by one argument
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// Expand an alias invocation without running it
    Expand {
        /// Alias name followed by its arguments, e.g. ".all users"
        line: String,
    },
}
