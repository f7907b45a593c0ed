//! JSON output formatting

use crate::repl::Dispatch;
use serde_json::{json, Value};

pub fn format_json(result: &Dispatch) -> String {
    let data: Value = match result {
        Dispatch::Alias(outcome) => serde_json::to_value(outcome).unwrap_or(json!(null)),
        Dispatch::Expanded { alias, command } => json!({ "alias": alias, "command": command }),
        Dispatch::Passthrough(line) => json!({ "command": line }),
    };

    serde_json::to_string_pretty(&data).unwrap_or_else(|_| "{}".to_string())
}
