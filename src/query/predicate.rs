//! Predicate filtering for todo queries
//!
//! One predicate per supplied filter. Matching is exact and case-sensitive,
//! except `BodyContains` which is case-sensitive substring containment.

use crate::store::Todo;

/// A single filter condition over one todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoPredicate {
    /// `status` equals
    Status(bool),
    /// `owner` equals
    Owner(String),
    /// `category` equals
    Category(String),
    /// `body` contains
    BodyContains(String),
}

impl TodoPredicate {
    /// Checks if a todo satisfies this predicate
    pub fn matches(&self, todo: &Todo) -> bool {
        match self {
            TodoPredicate::Status(expected) => todo.status == *expected,
            TodoPredicate::Owner(expected) => todo.owner == *expected,
            TodoPredicate::Category(expected) => todo.category == *expected,
            TodoPredicate::BodyContains(needle) => todo.body.contains(needle.as_str()),
        }
    }
}

/// A set of predicates combined with AND logic
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    predicates: Vec<TodoPredicate>,
}

impl PredicateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, predicate: TodoPredicate) -> Self {
        self.predicates.push(predicate);
        self
    }

    /// Check if a todo matches all predicates. An empty set matches everything.
    pub fn matches(&self, todo: &Todo) -> bool {
        self.predicates.iter().all(|p| p.matches(todo))
    }

    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }
}
