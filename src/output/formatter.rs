//! Output formatting

use crate::config::PrintMode;
use crate::output::human::format_human;
use crate::output::json::format_json;
use crate::repl::Dispatch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl From<PrintMode> for OutputFormat {
    fn from(mode: PrintMode) -> Self {
        match mode {
            PrintMode::Pretty => OutputFormat::Human,
            PrintMode::Json => OutputFormat::Json,
        }
    }
}

pub fn format_output(result: &Dispatch, format: &OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(result),
        OutputFormat::Json => format_json(result),
    }
}
