//! Result sorting for todo queries
//!
//! Sorts ascending by a single field, deterministically.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::store::Todo;

/// Fields a query may be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    Owner,
    Status,
    Body,
    Category,
    Id,
}

impl OrderField {
    /// Parses a wire name. Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "owner" => Some(OrderField::Owner),
            "status" => Some(OrderField::Status),
            "body" => Some(OrderField::Body),
            "category" => Some(OrderField::Category),
            "id" => Some(OrderField::Id),
            _ => None,
        }
    }

    /// Get the wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Owner => "owner",
            OrderField::Status => "status",
            OrderField::Body => "body",
            OrderField::Category => "category",
            OrderField::Id => "id",
        }
    }

    /// Compares two todos by this field's natural ordering.
    ///
    /// Strings compare lexicographically, `false < true`.
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            OrderField::Owner => a.owner.cmp(&b.owner),
            OrderField::Status => a.status.cmp(&b.status),
            OrderField::Body => a.body.cmp(&b.body),
            OrderField::Category => a.category.cmp(&b.category),
            OrderField::Id => a.id.cmp(&b.id),
        }
    }
}

/// Sorts query results
pub struct TodoSorter;

impl TodoSorter {
    /// Sorts todos ascending by `field`.
    ///
    /// Sort is stable: equal keys keep their relative order.
    pub fn sort(todos: &mut [Todo], field: OrderField) {
        todos.sort_by(|a, b| field.compare(a, b));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(id: &str, owner: &str, status: bool) -> Todo {
        Todo::new(id, owner, status, format!("body {id}"), "homework")
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_from_name() {
        assert_eq!(OrderField::from_name("category"), Some(OrderField::Category));
        assert_eq!(OrderField::from_name("id"), Some(OrderField::Id));
        assert_eq!(OrderField::from_name("_id"), None);
        assert_eq!(OrderField::from_name("OWNER"), None);
        for field in [
            OrderField::Owner,
            OrderField::Status,
            OrderField::Body,
            OrderField::Category,
            OrderField::Id,
        ] {
            assert_eq!(OrderField::from_name(field.as_str()), Some(field));
        }
    }

    #[test]
    fn test_sort_by_owner() {
        let mut todos = vec![make("1", "Fry", false), make("2", "Blanche", false), make("3", "Dawn", true)];

        TodoSorter::sort(&mut todos, OrderField::Owner);

        assert_eq!(ids(&todos), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_sort_stable() {
        let mut todos = vec![
            make("a", "Fry", false),
            make("b", "Blanche", false),
            make("c", "Fry", true),
            make("d", "Blanche", true),
        ];

        TodoSorter::sort(&mut todos, OrderField::Owner);

        assert_eq!(ids(&todos), vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn test_sort_status_false_first() {
        let mut todos = vec![make("1", "Fry", true), make("2", "Fry", false), make("3", "Fry", true)];

        TodoSorter::sort(&mut todos, OrderField::Status);

        assert_eq!(ids(&todos), vec!["2", "1", "3"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        // Uppercase sorts before lowercase
        let mut todos = vec![make("1", "barry", false), make("2", "Workman", false)];

        TodoSorter::sort(&mut todos, OrderField::Owner);

        assert_eq!(ids(&todos), vec!["2", "1"]);
    }
}
