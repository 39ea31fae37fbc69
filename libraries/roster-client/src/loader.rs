//! Fetch a user list and render it into a container.

use crate::error::Result;
use crate::source::UserSource;
use roster_core::ListContainer;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Loads users from a [`UserSource`] and appends one entry per user to a
/// [`ListContainer`].
///
/// Each call performs one fetch and appends; nothing is replaced or
/// de-duplicated, so loading twice renders the list twice. Rendering starts
/// only after the whole response has decoded, which means a failed load
/// leaves the container exactly as it was.
///
/// # Example
///
/// ```ignore
/// use roster_client::{ClientConfig, DirectoryClient, UserListLoader};
/// use roster_core::MemoryContainer;
///
/// let client = DirectoryClient::new(ClientConfig::default())?;
/// let loader = UserListLoader::new(client, MemoryContainer::default());
///
/// let rendered = loader.load().await;
/// println!("Rendered {} users", rendered);
/// ```
pub struct UserListLoader<S, C> {
    source: S,
    container: C,
}

impl<S, C> UserListLoader<S, C>
where
    S: UserSource,
    C: ListContainer,
{
    /// Create a loader rendering users from `source` into `container`.
    pub fn new(source: S, container: C) -> Self {
        Self { source, container }
    }

    /// The container entries are rendered into.
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Fetch and render, returning how many entries were appended.
    pub async fn try_load(&self) -> Result<usize> {
        let users = self.source.fetch_users().await?;

        for user in &users {
            self.container.append_item(user.display_name());
        }

        info!(
            container = self.container.id(),
            count = users.len(),
            "Rendered user list"
        );

        Ok(users.len())
    }

    /// Fetch and render, logging any failure instead of returning it.
    ///
    /// Returns the number of entries appended, which is 0 on failure.
    pub async fn load(&self) -> usize {
        match self.try_load().await {
            Ok(count) => count,
            Err(e) => {
                error!(
                    container = self.container.id(),
                    status = e.status(),
                    error = %e,
                    "Failed to load user list"
                );
                0
            }
        }
    }
}

impl<S, C> UserListLoader<S, C>
where
    S: UserSource + 'static,
    C: ListContainer + 'static,
{
    /// Dispatch a [`load`](Self::load) on the Tokio runtime and return
    /// immediately.
    ///
    /// Aborting the returned handle cancels the in-flight request; entries
    /// are only appended once the response has fully arrived.
    pub fn spawn_load(self: Arc<Self>) -> JoinHandle<usize> {
        tokio::spawn(async move { self.load().await })
    }
}
