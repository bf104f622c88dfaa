// ── Runtime connection configuration ──
//
// Describes *how* to reach the DNS API. Carries the token and transport
// tuning but never touches disk or the environment: the CLI builds a
// `ServiceConfig` from flags and profiles and hands it in.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use seldns_api::{DEFAULT_BASE_URL, DnsClient, TransportConfig};

use crate::error::CoreError;

/// Configuration for talking to one DNS hosting account.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// API root (e.g. `https://api.selectel.ru/domains/v1/`).
    pub api_url: Url,
    /// Account API token, sent as `X-Token`.
    pub token: SecretString,
    /// Request timeout.
    pub timeout: Duration,
}

impl ServiceConfig {
    /// Config for the public API endpoint with the default timeout.
    pub fn new(token: SecretString) -> Result<Self, CoreError> {
        let api_url = Url::parse(DEFAULT_BASE_URL).map_err(seldns_api::Error::from)?;
        Ok(Self {
            api_url,
            token,
            timeout: Duration::from_secs(30),
        })
    }

    /// Build the HTTP client this config describes.
    pub fn connect(&self) -> Result<DnsClient, CoreError> {
        let transport = TransportConfig::default().with_timeout(self.timeout);
        Ok(DnsClient::from_token(
            self.api_url.as_str(),
            &self.token,
            &transport,
        )?)
    }
}
