/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for talking to a locally running
/// mock backend.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend origin including the fixed `/api` prefix, without a
    /// trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                      |
    /// |---------------------------|------------------------------|
    /// | `BUILDNOTE_BASE_URL`      | `http://127.0.0.1:8443/api`  |
    /// | `BUILDNOTE_TIMEOUT_SECS`  | `30`                         |
    pub fn from_env() -> Self {
        let base_url = std::env::var("BUILDNOTE_BASE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8443/api".into());

        let timeout_secs: u64 = std::env::var("BUILDNOTE_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("BUILDNOTE_TIMEOUT_SECS must be a valid u64");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    /// Configuration for an explicit base URL (tests, dev tools).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout_secs: 30,
        }
    }
}
