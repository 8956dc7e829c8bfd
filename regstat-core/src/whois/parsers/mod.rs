//! Registry-specific WHOIS response parsers.
//!
//! Each supported registry is described by a rule table (see [`rules`])
//! and every table is run by the same executor. The TLD picks the table;
//! adding a registry means adding a table.

mod dialect;
mod dns_be;
mod extract;
mod icann;
mod iis;
mod nominet;
pub mod rules;

use once_cell::sync::Lazy;
use tracing::debug;

use super::record::{ParsedRecord, RawResponse};
use crate::error::Result;
pub use dialect::{Dialect, Grammar};
pub use extract::{
    extract_date, extract_state, extract_status_codes, first_match, matching_lines,
};
use rules::RuleSet;

/// Rule tables for every supported dialect, compiled once.
pub struct ParserRegistry {
    tables: [RuleSet; 9],
}

impl ParserRegistry {
    pub fn new() -> Self {
        Self {
            tables: Dialect::ALL.map(rules_for),
        }
    }

    pub fn rules(&self, dialect: Dialect) -> &RuleSet {
        &self.tables[dialect.index()]
    }

    /// Parses the reply of the registry serving `tld`.
    ///
    /// Fails only if `tld` is not one of the supported registries.
    pub fn parse(&self, response: &RawResponse, tld: &str, include_raw: bool) -> Result<ParsedRecord> {
        let dialect = Dialect::from_tld(tld)?;
        Ok(self.parse_dialect(response, dialect, include_raw))
    }

    pub fn parse_dialect(
        &self,
        response: &RawResponse,
        dialect: Dialect,
        include_raw: bool,
    ) -> ParsedRecord {
        let rules = self.rules(dialect);
        debug!(dialect = %dialect, rules = rules.name(), lines = response.len(), "Parsing WHOIS response");

        let mut record = rules.apply(response);
        if include_raw {
            record.response = Some(response.joined());
        }
        record
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global parser registry instance.
pub static PARSER_REGISTRY: Lazy<ParserRegistry> = Lazy::new(ParserRegistry::new);

/// Parses `response` with the rules of the registry serving `tld`.
pub fn parse_response(response: &RawResponse, tld: &str, include_raw: bool) -> Result<ParsedRecord> {
    PARSER_REGISTRY.parse(response, tld, include_raw)
}

fn rules_for(dialect: Dialect) -> RuleSet {
    match dialect.grammar() {
        Grammar::DnsBelgium => dns_be::rules(),
        Grammar::Icann => icann::rules(dialect),
        Grammar::Iis => iis::rules(),
        Grammar::Nominet => nominet::rules(),
    }
}
