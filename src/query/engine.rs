//! Query engine for todobase
//!
//! Evaluates validated queries against a record store, producing
//! deterministic results: same query + same snapshot = same output.

use serde::Serialize;

use crate::store::{RecordStore, Todo};

use super::errors::{QueryError, QueryResult};
use super::params::{RawParams, TodoQuery};
use super::sorter::TodoSorter;

/// Result of evaluating a list query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    /// Todos in result order
    pub todos: Vec<Todo>,
    /// Number of todos examined
    pub scanned_count: usize,
    /// Number of todos that passed every filter, before the limit
    pub matched_count: usize,
    /// Whether the limit dropped any matches
    pub limit_applied: bool,
}

impl QueryOutcome {
    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}

/// Read-only query engine over a borrowed store
pub struct QueryEngine<'a, S: RecordStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: RecordStore + ?Sized> QueryEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Validates `raw` and returns the matching todos.
    ///
    /// Any validation failure aborts before the store is touched.
    pub fn list_records(&self, raw: &RawParams) -> QueryResult<Vec<Todo>> {
        let query = TodoQuery::parse(raw)?;
        Ok(self.execute(&query).todos)
    }

    /// Filters, sorts and limits the snapshot for an already validated query.
    pub fn execute(&self, query: &TodoQuery) -> QueryOutcome {
        let predicates = query.predicates();
        let all = self.store.all();

        let mut todos: Vec<Todo> = all
            .iter()
            .filter(|todo| predicates.matches(todo))
            .cloned()
            .collect();
        let matched_count = todos.len();

        if let Some(field) = query.order_by {
            TodoSorter::sort(&mut todos, field);
        }

        let mut limit_applied = false;
        if let Some(limit) = query.effective_limit() {
            limit_applied = todos.len() > limit;
            todos.truncate(limit);
        }

        QueryOutcome {
            todos,
            scanned_count: all.len(),
            matched_count,
            limit_applied,
        }
    }

    /// Looks up one todo by identifier.
    pub fn get_record_by_id(&self, id: &str) -> QueryResult<Todo> {
        if id.is_empty() {
            return Err(QueryError::invalid_argument("id", id, "must not be empty"));
        }

        self.store
            .by_id(id)
            .cloned()
            .ok_or_else(|| QueryError::NotFound(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::OrderField;
    use crate::store::TodoStore;

    fn store() -> TodoStore {
        TodoStore::from_todos(vec![
            Todo::new("t1", "Fry", false, "Lorem ipsum", "homework"),
            Todo::new("t2", "Blanche", true, "dolor sit amet", "groceries"),
            Todo::new("t3", "Fry", true, "Lorem dolor", "software design"),
            Todo::new("t4", "Barry", false, "consectetur", "homework"),
            Todo::new("t5", "Blanche", false, "Lorem sit", "homework"),
        ])
        .unwrap()
    }

    fn ids(todos: &[Todo]) -> Vec<&str> {
        todos.iter().map(|t| t.id()).collect()
    }

    #[test]
    fn test_no_params_returns_everything_in_order() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let todos = engine.list_records(&RawParams::new()).unwrap();

        assert_eq!(ids(&todos), vec!["t1", "t2", "t3", "t4", "t5"]);
    }

    #[test]
    fn test_filter_preserves_store_order() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let todos = engine
            .list_records(&RawParams::new().with("category", "homework"))
            .unwrap();

        assert_eq!(ids(&todos), vec!["t1", "t4", "t5"]);
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let raw = RawParams::new()
            .with("owner", "Fry")
            .with("status", "true")
            .with("contains", "Lorem");
        let todos = engine.list_records(&raw).unwrap();

        assert_eq!(ids(&todos), vec!["t3"]);
    }

    #[test]
    fn test_sort_then_limit() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let raw = RawParams::new().with("orderBy", "owner").with("limit", "3");
        let todos = engine.list_records(&raw).unwrap();

        // Barry, then Blanche (t2 before t5), truncated after sorting
        assert_eq!(ids(&todos), vec!["t4", "t2", "t5"]);
    }

    #[test]
    fn test_non_positive_limit_is_unlimited() {
        let store = store();
        let engine = QueryEngine::new(&store);

        for limit in ["0", "-4"] {
            let todos = engine
                .list_records(&RawParams::new().with("limit", limit))
                .unwrap();
            assert_eq!(todos.len(), 5);
        }
    }

    #[test]
    fn test_limit_larger_than_result() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let outcome = engine.execute(&TodoQuery {
            limit: Some(100),
            ..Default::default()
        });

        assert_eq!(outcome.len(), 5);
        assert!(!outcome.limit_applied);
    }

    #[test]
    fn test_outcome_counts() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let outcome = engine.execute(&TodoQuery {
            owner: Some("Blanche".to_string()),
            order_by: Some(OrderField::Id),
            limit: Some(1),
            ..Default::default()
        });

        assert_eq!(outcome.scanned_count, 5);
        assert_eq!(outcome.matched_count, 2);
        assert!(outcome.limit_applied);
        assert_eq!(ids(&outcome.todos), vec!["t2"]);
    }

    #[test]
    fn test_invalid_param_aborts() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let raw = RawParams::new().with("owner", "Fry").with("orderBy", "unknown");
        let err = engine.list_records(&raw).unwrap_err();

        assert_eq!(err.code(), "TODO_INVALID_ARGUMENT");
    }

    #[test]
    fn test_get_record_by_id() {
        let store = store();
        let engine = QueryEngine::new(&store);

        assert_eq!(engine.get_record_by_id("t3").unwrap().owner, "Fry");
        assert_eq!(
            engine.get_record_by_id("missing"),
            Err(QueryError::NotFound("missing".to_string()))
        );
        assert!(matches!(
            engine.get_record_by_id(""),
            Err(QueryError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_results_are_independent_of_store() {
        let store = store();
        let engine = QueryEngine::new(&store);

        let mut todos = engine.list_records(&RawParams::new()).unwrap();
        todos[0].owner = "Mutated".to_string();

        assert_eq!(store.all()[0].owner, "Fry");
    }

    #[test]
    fn test_works_with_trait_object() {
        let store = store();
        let dyn_store: &dyn RecordStore = &store;
        let engine = QueryEngine::new(dyn_store);

        assert_eq!(engine.list_records(&RawParams::new()).unwrap().len(), 5);
    }
}
