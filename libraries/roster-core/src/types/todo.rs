//! Todo record domain type
use super::json_kind;
use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};

/// A single todo item as returned by `/todos/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    /// Owning user's identifier
    pub user_id: u64,
    /// Todo identifier
    pub id: u64,
    /// Short description of the task
    pub title: String,
    /// Whether the task is done
    pub completed: bool,
}

/// Decode a response body into a single todo.
pub fn decode_todo(body: &[u8]) -> Result<TodoRecord> {
    let value: serde_json::Value = serde_json::from_slice(body)?;

    if !value.is_object() {
        return Err(RosterError::unexpected_shape("object", json_kind(&value)));
    }

    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_fields() {
        let todo = decode_todo(
            br#"{"userId":1,"id":1,"title":"delectus aut autem","completed":false}"#,
        )
        .unwrap();

        assert_eq!(todo.user_id, 1);
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "delectus aut autem");
        assert!(!todo.completed);
    }

    #[test]
    fn serializes_back_to_api_shape() {
        let todo = TodoRecord {
            user_id: 3,
            id: 7,
            title: "write tests".to_string(),
            completed: true,
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 3);
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn rejects_array_body() {
        let err = decode_todo(b"[]").unwrap_err();
        assert!(matches!(
            err,
            RosterError::UnexpectedShape {
                expected: "object",
                found: "array"
            }
        ));
    }
}
