//! Domain types and their JSON decoders.

mod todo;
mod user;

pub use todo::{decode_todo, TodoRecord};
pub use user::{decode_users, UserRecord};

/// Identifier of the container user lists are rendered into
pub const DEFAULT_CONTAINER_ID: &str = "Users";

/// Name of a JSON value's kind, for error messages
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
