//! Rules for .be domains (DNS Belgium format).
//!
//! Example DNS Belgium response:
//! ```text
//! Domain: example.be
//! Status: NOT AVAILABLE
//! Registered: Tue Jan 25 2000
//!
//! Registrar Technical Contacts:
//! ```
//!
//! An unregistered name reports `Status: AVAILABLE`.

use super::rules::{DateField, RuleSet, Step, LETTERS_VALUE};
use crate::whois::record::DomainStatus;

pub(super) fn rules() -> RuleSet {
    RuleSet::new(
        "dns.be",
        vec![
            Step::date("Registered:", DateField::Registered),
            Step::status_codes("Status:", LETTERS_VALUE),
            Step::codes_imply(&["AVAILABLE"], DomainStatus::Deleted),
            // Runs after AVAILABLE, so `ok` wins if a reply carries both.
            Step::codes_imply(&["ok"], DomainStatus::Active),
        ],
    )
}
