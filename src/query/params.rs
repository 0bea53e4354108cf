//! # Query Parameter Validation
//!
//! Parses raw query parameters into a typed [`TodoQuery`].

use std::collections::HashMap;

use super::errors::{QueryError, QueryResult};
use super::predicate::{PredicateSet, TodoPredicate};
use super::sorter::OrderField;

pub const PARAM_LIMIT: &str = "limit";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_ORDER_BY: &str = "orderBy";
pub const PARAM_OWNER: &str = "owner";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_CONTAINS: &str = "contains";

/// Raw parameters as supplied on a request: name -> one or more values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    values: HashMap<String, Vec<String>>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a value for `name`
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// First supplied value for `name`
    pub fn first(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for RawParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RawParams::new();
        for (name, value) in iter {
            params.insert(name, value);
        }
        params
    }
}

impl From<HashMap<String, Vec<String>>> for RawParams {
    fn from(values: HashMap<String, Vec<String>>) -> Self {
        Self { values }
    }
}

/// Validated, typed query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoQuery {
    /// Maximum number of results; non-positive means unlimited
    pub limit: Option<i64>,
    pub status: Option<bool>,
    pub owner: Option<String>,
    pub category: Option<String>,
    /// Substring that `body` must contain
    pub contains: Option<String>,
    pub order_by: Option<OrderField>,
}

impl TodoQuery {
    /// Validates every recognized parameter.
    ///
    /// Parameters are checked in a fixed order so the reported failure is
    /// deterministic. Unrecognized names are ignored.
    pub fn parse(raw: &RawParams) -> QueryResult<Self> {
        Ok(TodoQuery {
            limit: raw.first(PARAM_LIMIT).map(parse_limit).transpose()?,
            status: raw.first(PARAM_STATUS).map(parse_status).transpose()?,
            order_by: raw.first(PARAM_ORDER_BY).map(parse_order_by).transpose()?,
            owner: parse_text(raw, PARAM_OWNER)?,
            category: parse_text(raw, PARAM_CATEGORY)?,
            contains: parse_text(raw, PARAM_CONTAINS)?,
        })
    }

    /// Builds the conjunction of predicates for the supplied filters
    pub fn predicates(&self) -> PredicateSet {
        let mut set = PredicateSet::new();
        if let Some(status) = self.status {
            set = set.and(TodoPredicate::Status(status));
        }
        if let Some(owner) = &self.owner {
            set = set.and(TodoPredicate::Owner(owner.clone()));
        }
        if let Some(category) = &self.category {
            set = set.and(TodoPredicate::Category(category.clone()));
        }
        if let Some(contains) = &self.contains {
            set = set.and(TodoPredicate::BodyContains(contains.clone()));
        }
        set
    }

    /// The limit to truncate to, if it bounds the result at all
    pub fn effective_limit(&self) -> Option<usize> {
        match self.limit {
            Some(n) if n > 0 => Some(usize::try_from(n).unwrap_or(usize::MAX)),
            _ => None,
        }
    }
}

/// Parse limit parameter (base-10 integer, sign allowed)
fn parse_limit(value: &str) -> QueryResult<i64> {
    value.parse().map_err(|_| {
        QueryError::invalid_argument(PARAM_LIMIT, value, "expected a base-10 integer")
    })
}

/// Parse status parameter (`true`/`false`, any case)
fn parse_status(value: &str) -> QueryResult<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(QueryError::invalid_argument(
            PARAM_STATUS,
            value,
            "expected 'true' or 'false'",
        ))
    }
}

fn parse_order_by(value: &str) -> QueryResult<OrderField> {
    OrderField::from_name(value).ok_or_else(|| {
        QueryError::invalid_argument(
            PARAM_ORDER_BY,
            value,
            "expected one of owner, status, body, category, id",
        )
    })
}

/// Free-text filters are taken verbatim but must not be empty
fn parse_text(raw: &RawParams, name: &str) -> QueryResult<Option<String>> {
    match raw.first(name) {
        None => Ok(None),
        Some("") => Err(QueryError::invalid_argument(name, "", "must not be empty")),
        Some(value) => Ok(Some(value.to_string())),
    }
}
