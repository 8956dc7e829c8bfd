use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegstatError {
    #[error("TLD not supported: {0}")]
    UnsupportedTld(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomain(String),

    #[error("WHOIS lookup failed: {0}")]
    WhoisError(String),

    #[error("WHOIS connection failed: {0}")]
    WhoisConnectionFailed(#[from] std::io::Error),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("JSON serialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RegstatError>;
