//! Roster Core
//!
//! Platform-agnostic types, traits, and error handling for Roster.
//!
//! This crate holds no I/O. Fetching lives in `roster-client`, and actual
//! rendering surfaces (terminal, GUI, ...) live in the applications.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord`, `TodoRecord`
//! - **Core Traits**: `ListContainer`, the "append displayable item" capability
//! - **Containers**: `MemoryContainer`, a thread-safe in-memory list
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::{decode_users, ListContainer, MemoryContainer};
//!
//! let users = decode_users(br#"[{"name":"Alice"},{"name":"Bob"}]"#).unwrap();
//! let container = MemoryContainer::new("Users");
//!
//! for user in &users {
//!     container.append_item(user.display_name());
//! }
//!
//! assert_eq!(container.items(), vec!["Alice", "Bob"]);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod container;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use container::MemoryContainer;
pub use error::{Result, RosterError};
pub use traits::ListContainer;
pub use types::{decode_todo, decode_users, TodoRecord, UserRecord, DEFAULT_CONTAINER_ID};
