use reqwest::header::HeaderMap;

/// Default copilot backend base URL
pub const COPILOT_DEFAULT_BASE: &str = "http://127.0.0.1:5000";

/// Configuration for the copilot client
///
/// The copilot contract carries no authentication, so configuration reduces
/// to the backend base URL.
#[derive(Clone, Debug)]
pub struct CopilotConfig {
    api_base: String,
}

impl Default for CopilotConfig {
    fn default() -> Self {
        let api_base = std::env::var("COPILOT_BASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| COPILOT_DEFAULT_BASE.into());

        Self { api_base }
    }
}

impl CopilotConfig {
    /// Creates a new configuration with default settings
    ///
    /// Reads `COPILOT_BASE_URL` from the environment when set; otherwise the
    /// backend's fixed local endpoint (`http://127.0.0.1:5000`) is used.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API base URL
    #[must_use]
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    /// Returns the configured API base URL
    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

/// Configuration trait for the copilot client
///
/// Implement this trait to provide custom endpoint configuration.
pub trait Config: Send + Sync {
    /// Returns HTTP headers to include in requests
    ///
    /// # Errors
    ///
    /// Returns an error if header values contain invalid characters.
    fn headers(&self) -> Result<HeaderMap, crate::error::CopilotError>;

    /// Constructs the full URL for an API endpoint
    fn url(&self, path: &str) -> String;

    /// Returns query parameters to include in requests
    fn query(&self) -> Vec<(&str, &str)>;
}

impl Config for CopilotConfig {
    fn headers(&self) -> Result<HeaderMap, crate::error::CopilotError> {
        // No authentication headers in the contract; reqwest sets content-type
        Ok(HeaderMap::new())
    }

    fn url(&self, path: &str) -> String {
        let base = self.api_base.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    fn query(&self) -> Vec<(&str, &str)> {
        vec![]
    }
}
