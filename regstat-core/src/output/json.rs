use super::OutputFormatter;
use crate::lookup::LookupResult;
use crate::whois::ParsedRecord;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        rendered.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }).to_string())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_lookup(&self, result: &LookupResult) -> String {
        self.to_json(result)
    }

    fn format_record(&self, record: &ParsedRecord) -> String {
        self.to_json(record)
    }

    fn format_tlds(&self, tlds: &[&str]) -> String {
        self.to_json(tlds)
    }
}
