//! Declarative rule tables and the executor that runs them.
//!
//! A rule table is an ordered list of [`Step`]s. Steps run unconditionally
//! in table order and later steps overwrite what earlier ones wrote, which
//! is how a registry's status precedence is expressed.

use regex::Regex;
use tracing::trace;

use super::extract::{extract_date, extract_state, extract_status_codes, first_match, matching_lines};
use crate::whois::record::{DomainStatus, ParsedRecord, RawResponse};

/// Status codes made of letters and spaces, e.g. `Status: NOT AVAILABLE`.
pub(super) const LETTERS_VALUE: &str = r":\s+([a-z\s]+)$";

/// A single word, e.g. `state: active`.
pub(super) const WORD_VALUE: &str = r":\s+([a-z]+)$";

/// An EPP code followed by its reference URL, e.g.
/// `Domain Status: clientHold https://icann.org/epp#clientHold`.
pub(super) const EPP_CODE_VALUE: &str = r"\s+([a-z\-]+)?\s+?[a-z0-9:/#.]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Registered,
    Expires,
}

#[derive(Debug, Clone)]
pub enum Step {
    /// First line matching `label` read as a date.
    Date { label: Regex, field: DateField },
    /// Every line matching `label` contributes the capture of `value`.
    StatusCodes { label: Regex, value: Regex },
    /// Sets `status` if any collected status code is one of `codes`.
    CodesImply {
        codes: &'static [&'static str],
        status: DomainStatus,
    },
    /// Maps the single value of the first `label` line through `states`.
    State {
        label: Regex,
        value: Regex,
        states: &'static [(&'static str, DomainStatus)],
    },
    /// Sets `status` if any line contains `pattern`.
    Phrase { pattern: Regex, status: DomainStatus },
    /// Sets `status` if nothing earlier did.
    Default(DomainStatus),
}

impl Step {
    /// Matches lines starting with `prefix`.
    pub fn date(prefix: &str, field: DateField) -> Self {
        Step::Date {
            label: label(prefix),
            field,
        }
    }

    pub fn status_codes(prefix: &str, value: &str) -> Self {
        Step::StatusCodes {
            label: label(prefix),
            value: compile(value),
        }
    }

    pub fn codes_imply(codes: &'static [&'static str], status: DomainStatus) -> Self {
        Step::CodesImply { codes, status }
    }

    pub fn state(
        prefix: &str,
        value: &str,
        states: &'static [(&'static str, DomainStatus)],
    ) -> Self {
        Step::State {
            label: label(prefix),
            value: compile(value),
            states,
        }
    }

    /// Matches `phrase` anywhere in a line.
    pub fn phrase(phrase: &str, status: DomainStatus) -> Self {
        Step::Phrase {
            pattern: compile(&regex::escape(phrase)),
            status,
        }
    }

    fn apply(&self, lines: &[String], record: &mut ParsedRecord) {
        match self {
            Step::Date { label, field } => {
                if let Some(date) = first_match(lines, label).and_then(extract_date) {
                    match field {
                        DateField::Registered => record.registered = Some(date),
                        DateField::Expires => record.expires = Some(date),
                    }
                }
            }
            Step::StatusCodes { label, value } => {
                let found = matching_lines(lines, label);
                if !found.is_empty() {
                    record.status_codes = Some(extract_status_codes(&found, value));
                }
            }
            Step::CodesImply { codes, status } => {
                if codes.iter().any(|code| record.has_status_code(code)) {
                    record.status = Some(*status);
                }
            }
            Step::State {
                label,
                value,
                states,
            } => {
                let state = first_match(lines, label).and_then(|line| extract_state(line, value));
                if let Some(state) = state {
                    if let Some((_, status)) = states.iter().find(|(name, _)| *name == state) {
                        record.status = Some(*status);
                    }
                }
            }
            Step::Phrase { pattern, status } => {
                if first_match(lines, pattern).is_some() {
                    record.status = Some(*status);
                }
            }
            Step::Default(status) => {
                if record.status.is_none() {
                    record.status = Some(*status);
                }
            }
        }
    }
}

/// The ordered steps for one registry dialect.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: &'static str,
    steps: Vec<Step>,
}

impl RuleSet {
    pub fn new(name: &'static str, steps: Vec<Step>) -> Self {
        Self { name, steps }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step in order against a fresh record.
    pub fn apply(&self, response: &RawResponse) -> ParsedRecord {
        let lines = response.lines();
        let mut record = ParsedRecord::default();

        for step in &self.steps {
            step.apply(lines, &mut record);
        }

        trace!(rules = self.name, status = ?record.status, "Rule table applied");
        record
    }
}

fn label(prefix: &str) -> Regex {
    compile(&format!("^{}", regex::escape(prefix)))
}

// Patterns come from the static rule tables, never from input.
fn compile(pattern: &str) -> Regex {
    Regex::new(&format!("(?i){}", pattern)).expect("Invalid rule table regex")
}
