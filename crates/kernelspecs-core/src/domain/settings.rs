//! Connection settings for the kernel spec endpoint

use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Base URL used when no settings are supplied
pub const DEFAULT_BASE_URL: &str = "http://localhost:8888/";

/// Relative path of the kernel spec listing, joined onto the base URL
pub const KERNELSPECS_PATH: &str = "api/kernelspecs";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for talking to a kernel server
///
/// Opaque to the validator; only the fetcher reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Server base URL. Any path component is kept (e.g. `http://host/user/alice/`).
    pub base_url: String,
    /// API token, sent as `Authorization: token <token>`
    pub token: Option<String>,
    /// Extra headers added to every request
    pub headers: HashMap<String, String>,
    /// Whole-request timeout
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            headers: HashMap::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("kernelspecs/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ServerSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL of the kernel spec listing for these settings
    pub fn kernelspecs_url(&self) -> Result<Url, url::ParseError> {
        kernelspecs_url(&self.base_url)
    }
}

/// Join [`KERNELSPECS_PATH`] onto `base_url`
///
/// The base is treated as a directory: a missing trailing slash is added
/// so that `http://host/prefix` resolves to `http://host/prefix/api/kernelspecs`
/// rather than replacing the last segment.
pub fn kernelspecs_url(base_url: &str) -> Result<Url, url::ParseError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.join(KERNELSPECS_PATH)
}
