use chrono::{NaiveDate, Utc};

use super::OutputFormatter;
use crate::colors::Palette;
use crate::lookup::LookupResult;
use crate::whois::{DomainStatus, ParsedRecord};

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors {
            text.label().to_string()
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: &str) -> String {
        if self.use_colors {
            text.value().to_string()
        } else {
            text.to_string()
        }
    }

    fn status(&self, status: DomainStatus) -> String {
        if self.use_colors {
            status.as_str().for_status(status).to_string()
        } else {
            status.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            text.caution().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.use_colors {
            text.danger().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("\n{}\n{}", text.heading(), "─".repeat(text.len()).muted())
        } else {
            format!("\n{}\n{}", text, "-".repeat(text.len()))
        }
    }

    fn record_lines(&self, record: &ParsedRecord, today: NaiveDate) -> Vec<String> {
        let mut output = Vec::new();

        match record.status {
            Some(status) => {
                output.push(format!("  {}: {}", self.label("Status"), self.status(status)))
            }
            None => output.push(format!("  {}: {}", self.label("Status"), self.value("unknown"))),
        }

        if let Some(ref codes) = record.status_codes {
            if !codes.is_empty() {
                output.push(format!("  {}:", self.label("Status codes")));
                for code in codes {
                    output.push(format!("    - {}", self.value(code)));
                }
            }
        }

        if let Some(registered) = record.registered {
            output.push(format!(
                "  {}: {}",
                self.label("Registered"),
                self.value(&registered.format("%Y-%m-%d").to_string())
            ));
        }

        if let Some(expires) = record.expires {
            let days_until = (expires - today).num_days();
            let expiry_str = expires.format("%Y-%m-%d").to_string();
            let status = if days_until < 0 {
                self.error(&format!("{} (expired {} days ago)", expiry_str, -days_until))
            } else if days_until < 30 {
                self.error(&format!("{} (expires in {} days!)", expiry_str, days_until))
            } else if days_until < 90 {
                self.warning(&format!("{} ({} days)", expiry_str, days_until))
            } else {
                self.value(&format!("{} ({} days)", expiry_str, days_until))
            };
            output.push(format!("  {}: {}", self.label("Expires"), status));
        }

        if let Some(ref response) = record.response {
            output.push(format!("  {}:", self.label("Response")));
            for line in response.lines() {
                output.push(format!("    {}", line));
            }
        }

        output
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_lookup(&self, result: &LookupResult) -> String {
        let mut output = Vec::new();

        output.push(self.header(&format!("WHOIS: {}", result.domain)));
        output.push(format!(
            "  {}: {}",
            self.label("Server"),
            self.value(&result.whois_server)
        ));
        output.extend(self.record_lines(&result.record, Utc::now().date_naive()));

        output.join("\n")
    }

    fn format_record(&self, record: &ParsedRecord) -> String {
        self.record_lines(record, Utc::now().date_naive()).join("\n")
    }

    fn format_tlds(&self, tlds: &[&str]) -> String {
        let mut output = vec![self.header("Supported TLDs")];
        for tld in tlds {
            output.push(format!("  .{}", self.value(tld)));
        }
        output.join("\n")
    }
}
