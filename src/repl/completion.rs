//! Prefix completion over built-ins and stored aliases

use crate::alias::{suggest_aliases, AliasStore, Suggestion, ALIAS_HELP};

use super::dispatch::ALIAS_KEYWORD;

/// REPL built-ins offered alongside aliases for the first word
pub const BUILTINS: &[(&str, &str)] = &[
    (ALIAS_KEYWORD, ALIAS_HELP),
    ("help", "Show help"),
    ("clear", "Clear the screen"),
    ("exit", "Exit the shell"),
];

/// Candidates for the word under the cursor.
///
/// Returns the byte offset where the completed word starts. The first word
/// completes from built-ins and alias names; the second word of an `alias`
/// line completes from alias names so an existing alias can be redefined.
pub fn complete_line(store: &dyn AliasStore, line: &str, pos: usize) -> (usize, Vec<Suggestion>) {
    let head = line.get(..pos).unwrap_or(line);

    let (start, prefix, candidates) = match head.find(' ') {
        None => {
            let mut candidates: Vec<Suggestion> = BUILTINS
                .iter()
                .map(|(text, description)| Suggestion {
                    text: text.to_string(),
                    description: description.to_string(),
                })
                .collect();
            candidates.extend(suggest_aliases(store));
            (0, head, candidates)
        }
        Some(space) => {
            let rest = &head[space + 1..];
            if &head[..space] != ALIAS_KEYWORD || rest.contains(' ') {
                return (pos, Vec::new());
            }
            (space + 1, rest, suggest_aliases(store))
        }
    };

    let matches = candidates
        .into_iter()
        .filter(|candidate| candidate.text.starts_with(prefix))
        .collect();
    (start, matches)
}
