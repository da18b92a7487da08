use std::time::Duration;

use reqwest::redirect::Policy;

use crate::{DocGuardError, Result};

const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMethod {
    Head,
    Get,
}

/// HTTP existence probe for external links (injectable for tests).
pub trait LinkProbe: Send + Sync {
    /// Request `url` and return the final status code after redirects.
    ///
    /// # Errors
    /// Returns `NetworkProbe` on any transport failure (timeout, connection, DNS).
    fn status(&self, method: ProbeMethod, url: &str) -> Result<u16>;
}

/// Production probe backed by a blocking reqwest client.
///
/// Talks to real servers, so it is excluded from coverage measurement.
#[derive(Debug)]
pub struct ReqwestProbe {
    client: reqwest::blocking::Client,
}

#[cfg(not(tarpaulin_include))]
impl ReqwestProbe {
    /// # Errors
    /// Returns `NetworkProbe` if the HTTP client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| DocGuardError::NetworkProbe {
                url: String::new(),
                message: format!("failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }
}

#[cfg(not(tarpaulin_include))]
impl LinkProbe for ReqwestProbe {
    fn status(&self, method: ProbeMethod, url: &str) -> Result<u16> {
        let request = match method {
            ProbeMethod::Head => self.client.head(url),
            ProbeMethod::Get => self.client.get(url),
        };

        let response = request.send().map_err(|e| {
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            DocGuardError::NetworkProbe {
                url: url.to_string(),
                message,
            }
        })?;

        Ok(response.status().as_u16())
    }
}
