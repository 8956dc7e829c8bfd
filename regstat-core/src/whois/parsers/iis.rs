//! Rules for .se domains (Internetstiftelsen format).
//!
//! Example IIS response:
//! ```text
//! state:            active
//! domain:           example.se
//! created:          2002-02-18
//! expires:          2026-02-18
//! status:           serverUpdateProhibited
//! ```
//!
//! The coarse status comes from `state:`; the `status:` lines are kept as
//! codes only.

use super::rules::{DateField, RuleSet, Step, LETTERS_VALUE, WORD_VALUE};
use crate::whois::record::DomainStatus;

const STATES: &[(&str, DomainStatus)] = &[
    ("deactivated", DomainStatus::Suspended),
    ("quarantine", DomainStatus::Suspended),
    ("active", DomainStatus::Active),
];

pub(super) fn rules() -> RuleSet {
    RuleSet::new(
        "iis.se",
        vec![
            Step::state("state:", WORD_VALUE, STATES),
            Step::status_codes("status:", LETTERS_VALUE),
            Step::phrase("not found", DomainStatus::Deleted),
            Step::date("created:", DateField::Registered),
            Step::date("expires:", DateField::Expires),
        ],
    )
}
