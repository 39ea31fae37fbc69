//! Where user records come from.

use crate::client::DirectoryClient;
use crate::error::Result;
use async_trait::async_trait;
use roster_core::UserRecord;
use std::sync::Arc;

/// Source of user records for a [`UserListLoader`](crate::UserListLoader).
///
/// `DirectoryClient` is the production implementation; tests substitute
/// canned or failing sources.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch all user records, in the order they should be rendered
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;
}

#[async_trait]
impl UserSource for DirectoryClient {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        DirectoryClient::fetch_users(self).await
    }
}

#[async_trait]
impl<S: UserSource + ?Sized> UserSource for Arc<S> {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        (**self).fetch_users().await
    }
}
