//! In-memory todo store
//!
//! The store is populated once from a JSON data file and is read-only
//! afterwards, so concurrent readers need no synchronization.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::record::Todo;

/// Read-only access to a snapshot of todos
pub trait RecordStore: Send + Sync {
    /// All todos in load order
    fn all(&self) -> &[Todo];

    /// Looks up a todo by identifier
    fn by_id(&self, id: &str) -> Option<&Todo>;

    /// Number of todos in the snapshot
    fn len(&self) -> usize {
        self.all().len()
    }

    /// Returns true if the snapshot holds no todos
    fn is_empty(&self) -> bool {
        self.all().is_empty()
    }
}

/// Vector-backed store with an id index
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Vec<Todo>,
    /// id -> position in `todos`
    by_id: HashMap<String, usize>,
}

impl TodoStore {
    /// Builds a store from already-parsed todos.
    ///
    /// Fails on duplicate identifiers or records with an empty `_id`,
    /// `owner` or `category`.
    pub fn from_todos(todos: Vec<Todo>) -> StoreResult<Self> {
        let mut by_id = HashMap::with_capacity(todos.len());

        for (position, todo) in todos.iter().enumerate() {
            Self::check_record(todo)?;
            if by_id.insert(todo.id.clone(), position).is_some() {
                return Err(StoreError::DuplicateId(todo.id.clone()));
            }
        }

        Ok(Self { todos, by_id })
    }

    /// Parses a JSON array of todos.
    pub fn from_json_str(content: &str) -> StoreResult<Self> {
        let todos: Vec<Todo> = serde_json::from_str(content)?;
        Self::from_todos(todos)
    }

    /// Reads and parses the data file at `path`.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    fn check_record(todo: &Todo) -> StoreResult<()> {
        if todo.id.is_empty() {
            return Err(StoreError::invalid_record("", "_id must not be empty"));
        }
        if todo.owner.is_empty() {
            return Err(StoreError::invalid_record(&todo.id, "owner must not be empty"));
        }
        if todo.category.is_empty() {
            return Err(StoreError::invalid_record(
                &todo.id,
                "category must not be empty",
            ));
        }
        Ok(())
    }
}

impl RecordStore for TodoStore {
    fn all(&self) -> &[Todo] {
        &self.todos
    }

    fn by_id(&self, id: &str) -> Option<&Todo> {
        self.by_id.get(id).map(|&position| &self.todos[position])
    }
}
