//! Human-readable output formatting

use crate::alias::AliasOutcome;
use crate::repl::Dispatch;

pub fn format_human(result: &Dispatch) -> String {
    match result {
        Dispatch::Alias(AliasOutcome::NoAliases) => "No aliases set".to_string(),
        Dispatch::Alias(AliasOutcome::Listed { aliases }) => {
            let mut output = String::from("Available aliases:\n");
            for alias in aliases {
                output.push_str(&format!("\nName: {}\nCommand: {}\n", alias.name, alias.command));
                if let Some(description) = &alias.description {
                    output.push_str(&format!("Description: {}\n", description));
                }
            }
            output
        }
        Dispatch::Alias(AliasOutcome::Created { alias }) => {
            format!(
                "Created new alias '{}' with command: {}",
                alias.name, alias.command
            )
        }
        Dispatch::Expanded { command, .. } => format!("=> {}", command),
        Dispatch::Passthrough(line) => format!("=> {}", line),
    }
}
