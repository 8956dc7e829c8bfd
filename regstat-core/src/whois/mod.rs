mod client;
pub mod parsers;
mod record;
mod servers;

pub use client::WhoisClient;
pub use parsers::{parse_response, Dialect, ParserRegistry, PARSER_REGISTRY};
pub use record::{DomainStatus, ParsedRecord, RawResponse};
pub use servers::{get_tld, get_whois_server, is_supported_tld, supported_tlds};
