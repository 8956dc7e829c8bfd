use super::parsers::Dialect;

/// WHOIS server answering for each registry with a known reply grammar.
pub fn get_whois_server(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Be => "whois.dns.be",
        Dialect::Ca => "whois.cira.ca",
        Dialect::Com | Dialect::Net => "whois.verisign-grs.com",
        Dialect::Io => "whois.nic.io",
        Dialect::Org => "whois.pir.org",
        Dialect::Se => "whois.iis.se",
        Dialect::Uk => "whois.nic.uk",
        Dialect::Us => "whois.nic.us",
    }
}

/// Supported TLDs, in listing order.
pub fn supported_tlds() -> Vec<&'static str> {
    Dialect::ALL.iter().map(|d| d.as_str()).collect()
}

pub fn is_supported_tld(tld: &str) -> bool {
    Dialect::from_tld(tld).is_ok()
}

pub fn get_tld(domain: &str) -> Option<&str> {
    domain.rsplit('.').next().filter(|tld| !tld.is_empty())
}
