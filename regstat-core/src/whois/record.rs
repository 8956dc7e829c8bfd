use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Coarse registration state derived from a registry reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DomainStatus {
    Active,
    Suspended,
    Deleted,
}

impl DomainStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DomainStatus::Active => "Active",
            DomainStatus::Suspended => "Suspended",
            DomainStatus::Deleted => "Deleted",
        }
    }
}

impl std::fmt::Display for DomainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The lines of a registry reply, trimmed, with blank lines removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    lines: Vec<String>,
}

impl RawResponse {
    /// Splits raw reply text into lines.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The reply rejoined with `\n`.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// Structured facts recovered from one registry reply.
///
/// Every field is present only when the registry's reply carried it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedRecord {
    #[serde(rename = "Status", skip_serializing_if = "Option::is_none")]
    pub status: Option<DomainStatus>,
    #[serde(rename = "StatusCodes", skip_serializing_if = "Option::is_none")]
    pub status_codes: Option<Vec<String>>,
    #[serde(rename = "Registered", skip_serializing_if = "Option::is_none")]
    pub registered: Option<NaiveDate>,
    #[serde(rename = "Expires", skip_serializing_if = "Option::is_none")]
    pub expires: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

impl ParsedRecord {
    pub fn has_status_code(&self, code: &str) -> bool {
        self.status_codes
            .as_ref()
            .is_some_and(|codes| codes.iter().any(|c| c == code))
    }
}
