use crate::domain::model::{DisplayRecord, Severity, Status};
use crate::domain::traits::SearchReporter;
use crate::presentation::render::{format_records, format_status};
use crate::presentation::theme::Theme;
use serde_json::json;

/// Prints cards to stdout and statuses to stderr.
pub struct TerminalReporter {
    theme: Theme,
    enable_emoji: bool,
}

impl TerminalReporter {
    pub fn new(theme: Theme, enable_emoji: bool) -> Self {
        Self {
            theme,
            enable_emoji,
        }
    }
}

impl SearchReporter for TerminalReporter {
    fn results(&self, _keyword: &str, records: &[DisplayRecord]) {
        print!("{}", format_records(records, &self.theme, self.enable_emoji));
    }

    fn status(&self, status: &Status) {
        let line = format_status(status, &self.theme, self.enable_emoji);
        match status.severity {
            Severity::Info => println!("{}", line),
            Severity::Warning | Severity::Error => eprintln!("{}", line),
        }
    }

    fn clear_input(&self) {
        tracing::debug!("Input cleared");
    }
}

/// One JSON object per publication, on stdout.
pub struct JsonReporter;

impl SearchReporter for JsonReporter {
    fn results(&self, keyword: &str, records: &[DisplayRecord]) {
        println!("{}", json!({ "keyword": keyword, "results": records }));
    }

    fn status(&self, status: &Status) {
        println!("{}", json!({ "status": status }));
    }

    fn clear_input(&self) {
        println!("{}", json!({ "clear_input": true }));
    }
}
