//! Rules for registries using the ICANN-style layout (.ca, .com, .io,
//! .net, .org, .us).
//!
//! Example response:
//! ```text
//! Domain Name: EXAMPLE.COM
//! Registry Domain ID: 2336799_DOMAIN_COM-VRSN
//! Creation Date: 1995-08-14T04:00:00Z
//! Registry Expiry Date: 2026-08-13T04:00:00Z
//! Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited
//! ```
//!
//! The registries agree on the layout but each answers a lookup for an
//! unregistered name with its own phrase.

use super::dialect::Dialect;
use super::rules::{DateField, RuleSet, Step, EPP_CODE_VALUE};
use crate::whois::record::DomainStatus;

/// EPP codes that mean the name no longer resolves.
const SUSPENDED_CODES: &[&str] = &["clientHold", "pendingDelete", "serverHold", "redemptionPeriod"];

/// Phrase the registry uses when the name is not registered.
pub(super) fn no_match_phrase(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Com | Dialect::Net => "no match for domain",
        Dialect::Us => "no Data Found",
        _ => "not found",
    }
}

pub(super) fn rules(dialect: Dialect) -> RuleSet {
    RuleSet::new(
        "icann",
        vec![
            Step::status_codes("domain status:", EPP_CODE_VALUE),
            Step::codes_imply(SUSPENDED_CODES, DomainStatus::Suspended),
            Step::codes_imply(&["ok"], DomainStatus::Active),
            Step::phrase(no_match_phrase(dialect), DomainStatus::Deleted),
            Step::Default(DomainStatus::Active),
            Step::date("creation date:", DateField::Registered),
            Step::date("registry expiry date:", DateField::Expires),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::whois::record::RawResponse;
    use chrono::NaiveDate;

    const SAMPLE_COM: &str = r#"
   Domain Name: EXAMPLE.COM
   Registry Domain ID: 2336799_DOMAIN_COM-VRSN
   Registrar WHOIS Server: whois.iana.org
   Updated Date: 2024-08-14T07:01:34Z
   Creation Date: 1995-08-14T04:00:00Z
   Registry Expiry Date: 2025-08-13T04:00:00Z
   Registrar: RESERVED-Internet Assigned Numbers Authority
   Domain Status: clientDeleteProhibited https://icann.org/epp#clientDeleteProhibited
   Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited
   Domain Status: clientUpdateProhibited https://icann.org/epp#clientUpdateProhibited
   Name Server: A.IANA-SERVERS.NET
   DNSSEC: signedDelegation
>>> Last update of whois database: 2024-10-01T12:00:00Z <<<
"#;

    const SAMPLE_COM_NO_MATCH: &str = r#"
No match for domain "UNREGISTERED-EXAMPLE-123.COM".
>>> Last update of whois database: 2024-10-01T12:00:00Z <<<

NOTICE: The expiration date displayed in this record is the date the
registrar's sponsorship of the domain name registration in the registry is
currently set to expire.
"#;

    const SAMPLE_ORG_REDEMPTION: &str = r#"
Domain Name: example-lapsed.org
Creation Date: 2012-05-01T10:11:12Z
Registry Expiry Date: 2024-05-01T10:11:12Z
Domain Status: redemptionPeriod https://icann.org/epp#redemptionPeriod
Domain Status: serverTransferProhibited https://icann.org/epp#serverTransferProhibited
"#;

    fn parse(dialect: Dialect, raw: &[&str]) -> crate::whois::ParsedRecord {
        rules(dialect).apply(&RawResponse::from_lines(raw))
    }

    #[test]
    fn test_icann_com_example() {
        let record = parse(
            Dialect::Com,
            &[
                "Domain Status: ok https://icann.org/epp#ok",
                "Creation Date: 2010-03-02T00:00:00Z",
                "Registry Expiry Date: 2026-03-02T00:00:00Z",
            ],
        );

        assert_eq!(record.status, Some(DomainStatus::Active));
        assert_eq!(record.status_codes, Some(vec!["ok".to_string()]));
        assert_eq!(record.registered, NaiveDate::from_ymd_opt(2010, 3, 2));
        assert_eq!(record.expires, NaiveDate::from_ymd_opt(2026, 3, 2));
    }

    #[test]
    fn test_icann_full_response() {
        let record = rules(Dialect::Com).apply(&RawResponse::from_text(SAMPLE_COM));

        assert_eq!(record.status, Some(DomainStatus::Active));
        assert_eq!(
            record.status_codes,
            Some(vec![
                "clientDeleteProhibited".to_string(),
                "clientTransferProhibited".to_string(),
                "clientUpdateProhibited".to_string(),
            ])
        );
        assert_eq!(record.registered, NaiveDate::from_ymd_opt(1995, 8, 14));
        assert_eq!(record.expires, NaiveDate::from_ymd_opt(2025, 8, 13));
    }

    #[test]
    fn test_icann_no_match_is_deleted() {
        let record = rules(Dialect::Com).apply(&RawResponse::from_text(SAMPLE_COM_NO_MATCH));

        assert_eq!(record.status, Some(DomainStatus::Deleted));
        assert_eq!(record.status_codes, None);
        assert_eq!(record.registered, None);
        assert_eq!(record.expires, None);
    }

    #[test]
    fn test_icann_redemption_is_suspended() {
        let record = rules(Dialect::Org).apply(&RawResponse::from_text(SAMPLE_ORG_REDEMPTION));

        assert_eq!(record.status, Some(DomainStatus::Suspended));
        assert_eq!(record.registered, NaiveDate::from_ymd_opt(2012, 5, 1));
    }

    #[test]
    fn test_icann_ok_overrides_hold_codes() {
        let record = parse(
            Dialect::Net,
            &[
                "Domain Status: pendingDelete https://icann.org/epp#pendingDelete",
                "Domain Status: ok https://icann.org/epp#ok",
            ],
        );
        assert_eq!(record.status, Some(DomainStatus::Active));
    }

    #[test]
    fn test_icann_no_match_phrase_wins_over_ok() {
        let record = parse(
            Dialect::Us,
            &["Domain Status: ok https://icann.org/epp#ok", "No Data Found"],
        );
        assert_eq!(record.status, Some(DomainStatus::Deleted));
    }

    #[test]
    fn test_icann_phrase_is_per_registry() {
        // .com does not recognise the .org phrase.
        let lines = ["Domain not found."];
        assert_eq!(parse(Dialect::Com, &lines).status, Some(DomainStatus::Active));
        assert_eq!(parse(Dialect::Org, &lines).status, Some(DomainStatus::Deleted));
        assert_eq!(parse(Dialect::Ca, &lines).status, Some(DomainStatus::Deleted));
        assert_eq!(parse(Dialect::Io, &lines).status, Some(DomainStatus::Deleted));
    }

    #[test]
    fn test_icann_empty_response_defaults_active() {
        let record = rules(Dialect::Ca).apply(&RawResponse::default());
        assert_eq!(record.status, Some(DomainStatus::Active));
        assert_eq!(record.status_codes, None);
        assert_eq!(record.registered, None);
        assert_eq!(record.expires, None);
    }

    #[test]
    fn test_no_match_phrases() {
        assert_eq!(no_match_phrase(Dialect::Com), "no match for domain");
        assert_eq!(no_match_phrase(Dialect::Net), "no match for domain");
        assert_eq!(no_match_phrase(Dialect::Us), "no Data Found");
        assert_eq!(no_match_phrase(Dialect::Ca), "not found");
        assert_eq!(no_match_phrase(Dialect::Io), "not found");
        assert_eq!(no_match_phrase(Dialect::Org), "not found");
    }
}
