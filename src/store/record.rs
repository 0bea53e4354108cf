//! The todo record

use serde::{Deserialize, Serialize};

/// A single todo as loaded from the data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque unique identifier
    #[serde(rename = "_id")]
    pub id: String,
    /// Responsible party
    pub owner: String,
    /// `true` when complete
    pub status: bool,
    /// Free-text content
    pub body: String,
    /// Classification tag
    pub category: String,
}

impl Todo {
    /// Creates a new todo
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        status: bool,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            status,
            body: body.into(),
            category: category.into(),
        }
    }

    /// Returns the todo identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_uses_underscore_id() {
        let todo: Todo = serde_json::from_value(json!({
            "_id": "58895985a22c04e761776d54",
            "owner": "Blanche",
            "status": false,
            "body": "In sunt ex non tempor cillum commodo amet incididunt.",
            "category": "software design"
        }))
        .unwrap();

        assert_eq!(todo.id(), "58895985a22c04e761776d54");
        assert_eq!(todo.owner, "Blanche");
        assert!(!todo.status);
    }

    #[test]
    fn test_serialize_round_trips_field_names() {
        let todo = Todo::new("a1", "Fry", true, "Ipsum", "homework");
        let value = serde_json::to_value(&todo).unwrap();

        assert_eq!(value["_id"], "a1");
        assert_eq!(value["status"], true);
        assert!(value.get("id").is_none());
    }
}
