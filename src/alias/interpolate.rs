//! Positional placeholder expansion

use tracing::debug;

use crate::error::AliasError;

/// The only placeholder marker. There is no escape syntax for it.
pub const PLACEHOLDER: &str = "$#";

/// Number of placeholder slots in a command template
pub fn placeholder_count(command: &str) -> usize {
    command.matches(PLACEHOLDER).count()
}

/// Fill the placeholders of `command` with the arguments on `raw_line`.
///
/// The first space-separated token of `raw_line` is the alias name and is
/// dropped. Splitting is on single spaces with no trimming, so repeated
/// spaces yield empty arguments. A template without placeholders is
/// returned unchanged whatever arguments were given.
pub fn interpolate_arguments(raw_line: &str, command: &str) -> Result<String, AliasError> {
    let expected = placeholder_count(command);
    if expected == 0 {
        return Ok(command.to_string());
    }

    let args: Vec<&str> = raw_line.split(' ').skip(1).collect();
    if args.len() != expected {
        return Err(AliasError::ArgumentMismatch {
            expected,
            supplied: args.len(),
        });
    }

    let segments: Vec<&str> = command.split(PLACEHOLDER).collect();
    let capacity = command.len() + args.iter().map(|a| a.len()).sum::<usize>();
    let mut realized = String::with_capacity(capacity);
    for (segment, arg) in segments.iter().zip(&args) {
        realized.push_str(segment);
        realized.push_str(arg);
    }
    realized.push_str(segments[expected]);

    debug!(template = command, realized = %realized, "interpolated alias arguments");
    Ok(realized)
}
