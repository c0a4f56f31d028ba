//! HTTP client for the kernel spec listing.
//!
//! One GET to `api/kernelspecs`, an exact-200 status check, then the body
//! is handed to [`validate_spec_models`]. Nothing is cached between calls.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{KernelSpecs, ServerSettings};
use crate::error::FetchError;
use crate::validation::validate_spec_models;

/// Client for fetching kernel specs from a kernel server
pub struct KernelSpecClient {
    settings: ServerSettings,
    client: reqwest::Client,
}

impl KernelSpecClient {
    /// Create a client from connection settings
    pub fn new(settings: ServerSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(FetchError::Request)?;

        Ok(Self { settings, client })
    }

    /// Create with a custom HTTP client (useful for testing)
    pub fn with_client(settings: ServerSettings, client: reqwest::Client) -> Self {
        Self { settings, client }
    }

    pub fn settings(&self) -> &ServerSettings {
        &self.settings
    }

    /// Fetch and validate the kernel specs
    ///
    /// Any status other than 200 fails with [`FetchError::Transport`]
    /// before the body is read.
    pub async fn fetch_specs(&self) -> Result<KernelSpecs, FetchError> {
        let url = self.settings.kernelspecs_url()?;

        let headers = self.request_headers()?;

        debug!("Fetching kernel specs from {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .headers(headers)
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Kernel spec request returned status: {}", status);
            return Err(FetchError::transport(status));
        }

        let raw: Value = response.json().await.map_err(FetchError::InvalidBody)?;

        let specs = validate_spec_models(&raw)?;

        info!(
            "Fetched {} kernel specs (default: {})",
            specs.len(),
            specs.default_name().unwrap_or("<none>")
        );

        Ok(specs)
    }

    fn request_headers(&self) -> Result<HeaderMap, FetchError> {
        let mut headers = HeaderMap::new();

        if let Some(token) = self.settings.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("token {}", token)).map_err(|_| {
                FetchError::InvalidHeader {
                    name: AUTHORIZATION.to_string(),
                }
            })?;
            headers.insert(AUTHORIZATION, value);
        }

        for (name, value) in &self.settings.headers {
            let invalid = || FetchError::InvalidHeader { name: name.clone() };
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|_| invalid())?;
            let header_value = HeaderValue::from_str(value).map_err(|_| invalid())?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// Fetch the kernel specs from a server
///
/// Uses [`ServerSettings::default`] when no settings are given.
pub async fn get_specs(settings: Option<&ServerSettings>) -> Result<KernelSpecs, FetchError> {
    let settings = settings.cloned().unwrap_or_default();
    KernelSpecClient::new(settings)?.fetch_specs().await
}
