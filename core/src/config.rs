use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_URI: &str = "https://api.chucknorris.io/jokes/random";
pub const DEFAULT_USER_AGENT: &str = concat!("microrest/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_MAX_BODY_SIZE: u64 = u64::MAX;

/// Settings for a `RequestClient`. Every field is optional when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Target of `build_default_get`.
    pub default_uri: String,
    /// Sent as `User-Agent` on every request.
    pub user_agent: String,
    /// Limit for establishing a connection.
    pub connect_timeout: Duration,
    /// Size limit in bytes of a response body. Unlimited by default.
    pub max_body_size: u64,
    /// Emit request/response diagnostics at debug level.
    pub debug: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            default_uri: DEFAULT_URI.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            max_body_size: DEFAULT_MAX_BODY_SIZE,
            debug: false,
        }
    }
}

impl ClientConfig {
    pub fn with_default_uri(mut self, uri: &str) -> Self {
        self.default_uri = uri.to_string();
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_max_body_size(mut self, limit: u64) -> Self {
        self.max_body_size = limit;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}
