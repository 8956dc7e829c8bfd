//! Registry WHOIS replies normalized into registration status and dates.
//!
//! ```
//! use regstat_core::{parse_response, DomainStatus, RawResponse};
//!
//! let raw = RawResponse::from_text(
//!     "Domain Status: ok https://icann.org/epp#ok\n\
//!      Creation Date: 2010-03-02T00:00:00Z\n\
//!      Registry Expiry Date: 2026-03-02T00:00:00Z",
//! );
//! let record = parse_response(&raw, "com", false).unwrap();
//! assert_eq!(record.status, Some(DomainStatus::Active));
//! assert_eq!(record.registered.unwrap().to_string(), "2010-03-02");
//! ```

pub mod colors;
pub mod error;
pub mod lookup;
pub mod output;
pub mod validation;
pub mod whois;

pub use error::{RegstatError, Result};
pub use validation::{is_valid_domain, normalize_domain, validate_domain};

pub use lookup::LookupResult;
pub use whois::{
    is_supported_tld, parse_response, supported_tlds, Dialect, DomainStatus, ParsedRecord,
    RawResponse, WhoisClient,
};

pub use output::{OutputFormat, OutputFormatter};
