use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::whois::{Dialect, DomainStatus, ParsedRecord};

/// Outcome of querying one domain's registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResult {
    pub domain: String,
    pub tld: Dialect,
    pub whois_server: String,
    pub record: ParsedRecord,
}

impl LookupResult {
    pub fn status(&self) -> Option<DomainStatus> {
        self.record.status
    }

    pub fn is_registered(&self) -> bool {
        matches!(
            self.record.status,
            Some(DomainStatus::Active | DomainStatus::Suspended)
        )
    }

    /// Days from `today` until expiry; negative once expired.
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.record
            .expires
            .map(|expires| (expires - today).num_days())
    }
}
