//! HTTP client for the user directory API.

use crate::error::{ClientError, Result};
use crate::types::{ClientConfig, TODOS_PATH, USERS_PATH};
use reqwest::Client;
use roster_core::{decode_todo, decode_users, TodoRecord, UserRecord};
use tracing::{debug, info};
use url::Url;

/// Client for the user directory API.
///
/// Cloning is cheap: clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, DirectoryClient};
///
/// let client = DirectoryClient::new(ClientConfig::default())?;
///
/// let users = client.fetch_users().await?;
/// println!("Fetched {} users", users.len());
///
/// let todo = client.fetch_todo(1).await?;
/// println!("{}: {}", todo.id, todo.title);
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryClient {
    http: Client,
    base_url: String,
}

impl DirectoryClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(format!("Roster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// Get the normalized base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the user list endpoint.
    pub fn users_url(&self) -> String {
        format!("{}{}", self.base_url, USERS_PATH)
    }

    /// Fetch the full user list, in response order.
    pub async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        let url = self.users_url();
        debug!(url = %url, "Fetching users");

        let body = self.get(&url).await?;
        let users = decode_users(&body).map_err(|e| {
            ClientError::ParseError(format!("Failed to parse user list: {}", e))
        })?;

        debug!(count = users.len(), "Fetched users");
        Ok(users)
    }

    /// Fetch a single todo by id.
    pub async fn fetch_todo(&self, id: u64) -> Result<TodoRecord> {
        let url = format!("{}{}/{}", self.base_url, TODOS_PATH, id);
        debug!(url = %url, "Fetching todo");

        let body = self.get(&url).await?;
        let todo = decode_todo(&body)
            .map_err(|e| ClientError::ParseError(format!("Failed to parse todo: {}", e)))?;

        info!(
            id = todo.id,
            user_id = todo.user_id,
            title = %todo.title,
            completed = todo.completed,
            "Fetched todo"
        );

        Ok(todo)
    }

    /// GET `url` and return the body of a successful response.
    ///
    /// The status is checked before the body is handed to any decoder.
    async fn get(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ClientError::ServerUnreachable(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let body = response.bytes().await?;
            Ok(body.to_vec())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}
