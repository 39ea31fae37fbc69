//! Roster Client
//!
//! HTTP client and user list loader for the user directory API.
//!
//! # Features
//!
//! - **Directory client**: Fetch the user list and individual todos
//! - **User list loader**: Render fetched users into any `ListContainer`
//!
//! # Example
//!
//! ```ignore
//! use roster_client::{ClientConfig, DirectoryClient, UserListLoader};
//! use roster_core::MemoryContainer;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DirectoryClient::new(ClientConfig::default())?;
//!     let loader = UserListLoader::new(client, MemoryContainer::default());
//!
//!     // Errors are logged; the container is left untouched on failure
//!     loader.load().await;
//!
//!     for name in loader.container().items() {
//!         println!("{}", name);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod loader;
mod source;
mod types;

pub use client::DirectoryClient;
pub use error::{ClientError, Result};
pub use loader::UserListLoader;
pub use source::UserSource;
pub use types::{ClientConfig, DEFAULT_BASE_URL, TODOS_PATH, USERS_PATH};
