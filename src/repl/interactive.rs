//! Interactive REPL implementation

use std::sync::Arc;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;

use crate::alias::{AliasStore, ConfigStore, ALIAS_HELP};
use crate::error::{HostqError, Result};
use crate::output::{format_output, OutputFormat};
use crate::repl::completion::complete_line;
use crate::repl::dispatch::{dispatch_line, parse_builtin, Builtin};

/// Rustyline helper completing built-ins and alias names from the live store
struct ShellHelper {
    store: Arc<ConfigStore>,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, suggestions) = complete_line(&*self.store, line, pos);
        let pairs = suggestions
            .into_iter()
            .map(|s| Pair {
                display: format!("{:<12} {}", s.text, s.description),
                replacement: s.text,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}

pub fn run_repl(store: Arc<ConfigStore>, format: OutputFormat) -> Result<()> {
    let mut rl: Editor<ShellHelper, DefaultHistory> =
        Editor::new().map_err(|e| HostqError::Repl(e.to_string()))?;
    rl.set_helper(Some(ShellHelper {
        store: Arc::clone(&store),
    }));

    println!("Hostq v{} - Interactive Mode", env!("CARGO_PKG_VERSION"));
    println!("Type 'help' for commands, 'exit' to quit\n");

    loop {
        match rl.readline("hostq> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }

                match parse_builtin(&line) {
                    Some(Builtin::Exit) => {
                        println!("Goodbye!");
                        break;
                    }
                    Some(Builtin::Help) => {
                        print_help(&*store);
                        continue;
                    }
                    Some(Builtin::Clear) => {
                        print!("\x1B[2J\x1B[1;1H");
                        continue;
                    }
                    None => {}
                }

                let _ = rl.add_history_entry(line.as_str());

                // Untrimmed: spaces are argument separators
                match dispatch_line(&*store, &line) {
                    Ok(result) => println!("{}\n", format_output(&result, &format)),
                    Err(e) => eprintln!("Error: {}\n", e),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                println!("Goodbye!");
                break;
            }
            Err(err) => {
                debug!(error = ?err, "readline failed");
                return Err(HostqError::Repl(err.to_string()));
            }
        }
    }

    Ok(())
}

fn print_help(store: &dyn AliasStore) {
    println!(
        r#"
Hostq Commands
==============

ALIASES:
  alias                           - List current aliases
  alias NAME COMMAND              - Create or replace an alias
  NAME ARG...                     - Run an alias, filling each $# in order

  {}

REPL Commands:
  help, ?                         - Show this help
  clear, cls                      - Clear screen
  exit, quit                      - Exit REPL
"#,
        ALIAS_HELP
    );

    let aliases = store.list_aliases();
    if !aliases.is_empty() {
        println!("Defined aliases: {}\n", aliases.len());
    }
}
