use serde::{Deserialize, Serialize};

use crate::error::{RegstatError, Result};

/// A registry whose WHOIS reply grammar is understood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Be,
    Ca,
    Com,
    Io,
    Org,
    Net,
    Se,
    Uk,
    Us,
}

/// Families of registries sharing one reply grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// DNS Belgium (.be)
    DnsBelgium,
    /// The ICANN-style `Domain Status:` / `Creation Date:` layout.
    Icann,
    /// Internetstiftelsen (.se)
    Iis,
    /// Nominet (.uk)
    Nominet,
}

impl Dialect {
    /// Declaration order, which is also the order TLDs are listed in.
    pub const ALL: [Dialect; 9] = [
        Dialect::Be,
        Dialect::Ca,
        Dialect::Com,
        Dialect::Io,
        Dialect::Org,
        Dialect::Net,
        Dialect::Se,
        Dialect::Uk,
        Dialect::Us,
    ];

    /// Resolves a TLD such as `"com"`, `"COM"` or `".com"`.
    pub fn from_tld(tld: &str) -> Result<Self> {
        let normalized = tld.trim().trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.as_str() == normalized)
            .ok_or_else(|| RegstatError::UnsupportedTld(tld.to_string()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Be => "be",
            Dialect::Ca => "ca",
            Dialect::Com => "com",
            Dialect::Io => "io",
            Dialect::Org => "org",
            Dialect::Net => "net",
            Dialect::Se => "se",
            Dialect::Uk => "uk",
            Dialect::Us => "us",
        }
    }

    pub fn grammar(self) -> Grammar {
        match self {
            Dialect::Be => Grammar::DnsBelgium,
            Dialect::Ca | Dialect::Com | Dialect::Io | Dialect::Org | Dialect::Net | Dialect::Us => {
                Grammar::Icann
            }
            Dialect::Se => Grammar::Iis,
            Dialect::Uk => Grammar::Nominet,
        }
    }

    pub(super) fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Dialect {
    type Err = RegstatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_tld(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tld_accepts_case_and_dot() {
        assert_eq!(Dialect::from_tld("com").unwrap(), Dialect::Com);
        assert_eq!(Dialect::from_tld("UK").unwrap(), Dialect::Uk);
        assert_eq!(Dialect::from_tld(".se").unwrap(), Dialect::Se);
        assert_eq!("io".parse::<Dialect>().unwrap(), Dialect::Io);
    }

    #[test]
    fn test_from_tld_rejects_unsupported() {
        assert!(matches!(
            Dialect::from_tld("xyz"),
            Err(RegstatError::UnsupportedTld(tld)) if tld == "xyz"
        ));
        assert!(Dialect::from_tld("").is_err());
        assert!(Dialect::from_tld("co.uk").is_err());
    }

    #[test]
    fn test_index_follows_all() {
        for (i, dialect) in Dialect::ALL.iter().enumerate() {
            assert_eq!(dialect.index(), i);
        }
    }

    #[test]
    fn test_grammar_families() {
        let icann: Vec<_> = Dialect::ALL
            .into_iter()
            .filter(|d| d.grammar() == Grammar::Icann)
            .map(Dialect::as_str)
            .collect();
        assert_eq!(icann, vec!["ca", "com", "io", "org", "net", "us"]);
        assert_eq!(Dialect::Be.grammar(), Grammar::DnsBelgium);
        assert_eq!(Dialect::Se.grammar(), Grammar::Iis);
        assert_eq!(Dialect::Uk.grammar(), Grammar::Nominet);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Dialect::Net).unwrap(), "\"net\"");
    }
}
