use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

use super::parsers::{Dialect, PARSER_REGISTRY};
use super::record::RawResponse;
use super::servers::{get_tld, get_whois_server};
use crate::error::{RegstatError, Result};
use crate::lookup::LookupResult;
use crate::validation::{normalize_domain, validate_domain};

const WHOIS_PORT: u16 = 43;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RESPONSE_SIZE: usize = 1024 * 1024; // 1MB

/// Fetches replies from the registry WHOIS servers over TCP.
#[derive(Debug, Clone)]
pub struct WhoisClient {
    timeout: Duration,
    port: u16,
    server_override: Option<String>,
}

impl Default for WhoisClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WhoisClient {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            port: WHOIS_PORT,
            server_override: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Queries `server` instead of the registry's own WHOIS server.
    pub fn with_server_override(mut self, server: impl Into<String>) -> Self {
        self.server_override = Some(server.into());
        self
    }

    /// Looks up `domain` and parses the reply with its registry's rules.
    ///
    /// Unsupported TLDs are rejected before any connection is made.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn lookup(&self, domain: &str, include_raw: bool) -> Result<LookupResult> {
        let (domain, dialect) = self.resolve(domain)?;
        let whois_server = self.server_for(dialect);

        let raw = self.query_server(&whois_server, &domain).await?;
        let record = PARSER_REGISTRY.parse_dialect(&raw, dialect, include_raw);
        debug!(status = ?record.status, "WHOIS lookup complete");

        Ok(LookupResult {
            domain,
            tld: dialect,
            whois_server,
            record,
        })
    }

    /// Fetches the unparsed reply for `domain`.
    #[instrument(skip(self), fields(domain = %domain))]
    pub async fn query(&self, domain: &str) -> Result<RawResponse> {
        let (domain, dialect) = self.resolve(domain)?;
        let whois_server = self.server_for(dialect);
        self.query_server(&whois_server, &domain).await
    }

    pub async fn query_server(&self, server: &str, query: &str) -> Result<RawResponse> {
        let addr = format!("{}:{}", server, self.port);
        debug!(whois_server = %addr, "Querying WHOIS server");

        let mut stream = timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| RegstatError::Timeout(format!("Connection to {} timed out", server)))??;

        // Send query with CRLF
        let query_bytes = format!("{}\r\n", query);
        timeout(self.timeout, stream.write_all(query_bytes.as_bytes()))
            .await
            .map_err(|_| RegstatError::Timeout("Write timed out".to_string()))?
            .map_err(|e| RegstatError::WhoisError(format!("Failed to send query: {}", e)))?;

        let mut response = Vec::new();
        let mut buf = [0u8; 4096];

        loop {
            match timeout(self.timeout, stream.read(&mut buf)).await {
                Ok(Ok(0)) => break, // EOF
                Ok(Ok(n)) => {
                    response.extend_from_slice(&buf[..n]);
                    if response.len() > MAX_RESPONSE_SIZE {
                        return Err(RegstatError::WhoisError("Response too large".to_string()));
                    }
                }
                Ok(Err(e)) => {
                    return Err(RegstatError::WhoisError(format!("Read error: {}", e)));
                }
                Err(_) => {
                    // Some servers keep the connection open after answering
                    if !response.is_empty() {
                        warn!(server = %server, "Read timed out, using partial response");
                        break;
                    }
                    return Err(RegstatError::Timeout("Read timed out".to_string()));
                }
            }
        }

        Ok(RawResponse::from_text(&decode(response)))
    }

    fn resolve(&self, domain: &str) -> Result<(String, Dialect)> {
        let domain = normalize_domain(domain);
        let tld = get_tld(&domain).ok_or_else(|| RegstatError::InvalidDomain(domain.clone()))?;

        let dialect = Dialect::from_tld(tld).inspect_err(|_| {
            warn!(tld = %tld, "Refusing lookup for unsupported TLD");
        })?;
        validate_domain(&domain)?;

        Ok((domain, dialect))
    }

    fn server_for(&self, dialect: Dialect) -> String {
        self.server_override
            .clone()
            .unwrap_or_else(|| get_whois_server(dialect).to_string())
    }
}

/// UTF-8, falling back to Latin-1.
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap_or_else(|e| e.into_bytes().iter().map(|&c| c as char).collect())
}
