//! Domain name normalization and syntax checks

use crate::error::{RegstatError, Result};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Normalize a domain name as typed by a user
///
/// This function:
/// - Removes http:// and https:// prefixes
/// - Removes trailing slashes and paths
/// - Removes www. prefix and a trailing root dot
/// - Converts to lowercase
///
/// It does not validate; see [`validate_domain`].
pub fn normalize_domain(domain: &str) -> String {
    let domain = domain.trim().to_lowercase();

    let domain = domain
        .strip_prefix("http://")
        .or_else(|| domain.strip_prefix("https://"))
        .unwrap_or(&domain);

    let domain = domain.split('/').next().unwrap_or(domain);
    let domain = domain.strip_prefix("www.").unwrap_or(domain);
    let domain = domain.strip_suffix('.').unwrap_or(domain);

    domain.to_string()
}

/// Check hostname syntax: at least two labels, each 1-63 alphanumerics or
/// inner hyphens, 253 characters in total.
pub fn validate_domain(domain: &str) -> Result<()> {
    let invalid = || RegstatError::InvalidDomain(domain.to_string());

    if domain.is_empty() || domain.len() > MAX_DOMAIN_LEN || !domain.contains('.') {
        return Err(invalid());
    }

    for label in domain.split('.') {
        if label.is_empty() || label.len() > MAX_LABEL_LEN {
            return Err(invalid());
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err(invalid());
        }
        if !label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(invalid());
        }
    }

    Ok(())
}

pub fn is_valid_domain(domain: &str) -> bool {
    validate_domain(domain).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_domain() {
        assert_eq!(normalize_domain("example.com"), "example.com");
        assert_eq!(normalize_domain("EXAMPLE.COM"), "example.com");
        assert_eq!(normalize_domain("https://www.example.com/path"), "example.com");
        assert_eq!(normalize_domain("  http://example.se/  "), "example.se");
        assert_eq!(normalize_domain("example.co.uk."), "example.co.uk");
    }

    #[test]
    fn test_valid_domains() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("sub.example.co.uk"));
        assert!(is_valid_domain("xn--bcher-kva.be"));
        assert!(is_valid_domain("a-b.io"));
    }

    #[test]
    fn test_invalid_domains() {
        assert!(!is_valid_domain(""));
        assert!(!is_valid_domain("localhost"));
        assert!(!is_valid_domain("example..com"));
        assert!(!is_valid_domain(".example.com"));
        assert!(!is_valid_domain("-example.com"));
        assert!(!is_valid_domain("example-.com"));
        assert!(!is_valid_domain("exa mple.com"));
        assert!(!is_valid_domain("example.com; rm -rf /"));
        assert!(!is_valid_domain(&format!("{}.com", "a".repeat(64))));
        assert!(!is_valid_domain(&format!("{}.com", "a.".repeat(130))));
    }

    #[test]
    fn test_validate_domain_error_carries_input() {
        match validate_domain("bad_domain.com") {
            Err(RegstatError::InvalidDomain(d)) => assert_eq!(d, "bad_domain.com"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
