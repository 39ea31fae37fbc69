//! Configuration types for the Roster client.

use std::time::Duration;

/// Base URL of the public directory API.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Path of the user list endpoint, relative to the base URL.
pub const USERS_PATH: &str = "/users";

/// Path of the todo endpoint, relative to the base URL.
pub const TODOS_PATH: &str = "/todos";

/// Configuration for connecting to the directory API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "https://jsonplaceholder.typicode.com")
    pub base_url: String,
    /// Total time allowed for one request
    pub timeout: Duration,
    /// Time allowed to establish the connection
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config for the given base URL with default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Override both timeouts.
    pub fn with_timeouts(mut self, timeout: Duration, connect_timeout: Duration) -> Self {
        self.timeout = timeout;
        self.connect_timeout = connect_timeout;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}
