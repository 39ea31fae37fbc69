//! User record domain type
use super::json_kind;
use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// One user as returned by the directory API.
///
/// The API's user object is much richer (address, company, ...), but only
/// the display name is consumed. Unknown fields are ignored on decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Display name, absent on records that omit it
    #[serde(default)]
    pub name: Option<String>,
}

impl UserRecord {
    /// Create a record with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Label to render for this record.
    ///
    /// A missing name renders as an empty label.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Decode a response body into user records, preserving order.
///
/// The body must be a JSON array. Anything else, including a single
/// object, is rejected so callers never render a partial list.
pub fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    if !value.is_array() {
        return Err(RosterError::unexpected_shape("array", json_kind(&value)));
    }

    let users: Vec<UserRecord> = serde_json::from_value(value)?;
    tracing::trace!(count = users.len(), "Decoded user records");

    Ok(users)
}
