//! Rules for .uk domains (Nominet format).
//!
//! Nominet writes its dates as `DD-Mon-YYYY` inside a "Relevant dates"
//! section and reports lifecycle state in prose rather than EPP codes.
//!
//! Example Nominet response:
//! ```text
//! Domain name:
//!     example.co.uk
//!
//! Relevant dates:
//!     Registered on: 26-Aug-2003
//!     Expiry date:  26-Aug-2026
//!     Last updated:  25-Jul-2024
//!
//! Registration status:
//!     Registered until expiry date.
//! ```

use super::rules::{DateField, RuleSet, Step};
use crate::whois::record::DomainStatus;

pub(super) fn rules() -> RuleSet {
    RuleSet::new(
        "nominet",
        vec![
            Step::phrase("registration has been SUSPENDED", DomainStatus::Suspended),
            // Checked second, so it wins over a suspension notice.
            Step::phrase("domain name has not been registered", DomainStatus::Deleted),
            Step::Default(DomainStatus::Active),
            Step::date("registered on:", DateField::Registered),
            Step::date("expiry date:", DateField::Expires),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whois::record::RawResponse;
    use chrono::NaiveDate;

    const SAMPLE_NOMINET_RESPONSE: &str = r#"
    Domain name:
        example.co.uk

    Data validation:
        Nominet was able to match the registrant's name and address against a 3rd party data source on 10-Dec-2012

    Registrar:
        Example Registrar Ltd [Tag = EXAMPLE]
        URL: https://www.example-registrar.co.uk

    Relevant dates:
        Registered on: 26-Aug-2003
        Expiry date:  26-Aug-2026
        Last updated:  25-Jul-2024

    Registration status:
        Registered until expiry date.

    Name servers:
        ns1.example.co.uk
        ns2.example.co.uk

    WHOIS lookup made at 10:00:00 01-Jan-2025
"#;

    const SAMPLE_NOMINET_SUSPENDED: &str = r#"
    Domain name:
        suspended-example.co.uk

    This domain registration has been SUSPENDED.

    Relevant dates:
        Registered on: 01-Mar-2019
        Expiry date:  01-Mar-2025
"#;

    #[test]
    fn test_nominet_registered() {
        let record = rules().apply(&RawResponse::from_text(SAMPLE_NOMINET_RESPONSE));

        assert_eq!(record.status, Some(DomainStatus::Active));
        assert_eq!(record.registered, NaiveDate::from_ymd_opt(2003, 8, 26));
        assert_eq!(record.expires, NaiveDate::from_ymd_opt(2026, 8, 26));
        assert_eq!(record.status_codes, None);
    }

    #[test]
    fn test_nominet_suspended() {
        let record = rules().apply(&RawResponse::from_text(SAMPLE_NOMINET_SUSPENDED));

        assert_eq!(record.status, Some(DomainStatus::Suspended));
        assert_eq!(record.registered, NaiveDate::from_ymd_opt(2019, 3, 1));
        assert_eq!(record.expires, NaiveDate::from_ymd_opt(2025, 3, 1));
    }

    #[test]
    fn test_nominet_not_registered() {
        let record = rules().apply(&RawResponse::from_lines([
            "This domain name has not been registered.",
        ]));

        assert_eq!(record.status, Some(DomainStatus::Deleted));
        assert_eq!(record.registered, None);
        assert_eq!(record.expires, None);
    }

    #[test]
    fn test_nominet_not_registered_overrides_suspended() {
        let record = rules().apply(&RawResponse::from_lines([
            "This domain registration has been SUSPENDED.",
            "This domain name has not been registered.",
        ]));
        assert_eq!(record.status, Some(DomainStatus::Deleted));
    }

    #[test]
    fn test_nominet_empty_response_defaults_active() {
        let record = rules().apply(&RawResponse::default());
        assert_eq!(record.status, Some(DomainStatus::Active));
        assert_eq!(record.registered, None);
    }
}
