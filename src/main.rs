//! Hostq CLI - query remote hosts with reusable aliases

use std::io;
use std::sync::Arc;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hostq::cli::{Args, SubCommand};
use hostq::repl::dispatch::ALIAS_KEYWORD;
use hostq::{
    dispatch_line, format_output, load_config, resolve_config_path, run_alias_command, Alias,
    AliasError, AliasOutcome, AliasStore, Config, ConfigStore, Dispatch, HostqError, OutputFormat,
};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> hostq::Result<()> {
    let path = resolve_config_path(args.config.as_deref());
    let loaded = load_config(&path);

    let debug_enabled = args.verbose || loaded.as_ref().is_ok_and(|c| c.debug_enabled);
    init_logging(debug_enabled);

    let store = match loaded {
        Ok(config) => {
            debug!(path = %path.display(), aliases = config.aliases.len(), "loaded config");
            ConfigStore::persistent(config, &path)
        }
        Err(e) => {
            warn!(error = %e, "couldn't load user config");
            eprintln!("Using defaults");
            // An explicit config path that does not exist yet is created on first write
            if args.config.is_some() && !path.exists() {
                ConfigStore::persistent(Config::builtin(), &path)
            } else {
                ConfigStore::in_memory(Config::builtin())
            }
        }
    };

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::from(store.config().print_mode)
    };

    match args.command {
        SubCommand::Repl => hostq::repl::run_repl(Arc::new(store), format),

        SubCommand::Aliases => {
            let outcome = run_alias_command(&store, ALIAS_KEYWORD)?;
            println!("{}", format_output(&Dispatch::Alias(outcome), &format));
            Ok(())
        }

        SubCommand::Alias { name, command } => {
            if name.is_empty() {
                return Err(AliasError::EmptyName.into());
            }
            // Shell arguments are already split, so the template may span words
            let command = command.join(" ");
            store
                .add_alias(&name, &command)
                .map_err(AliasError::Creation)?;
            if store.path().is_none() {
                warn!("no config file in use, alias will not outlive this process");
            }
            let outcome = AliasOutcome::Created {
                alias: Alias::new(name, command),
            };
            println!("{}", format_output(&Dispatch::Alias(outcome), &format));
            Ok(())
        }

        SubCommand::Expand { line } => match dispatch_line(&store, &line)? {
            Dispatch::Passthrough(line) => {
                let first = line.split(' ').next().unwrap_or_default().to_string();
                Err(HostqError::UnknownAlias(first))
            }
            result => {
                println!("{}", format_output(&result, &format));
                Ok(())
            }
        },
    }
}

fn init_logging(debug_enabled: bool) {
    let default_level = if debug_enabled { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
