//! # Response Formatting
//!
//! Standard response envelopes for the REST API.

use serde::Serialize;

/// List response
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub data: Vec<T>,
    pub count: usize,
    /// The requested limit, echoed back when one was supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>, limit: Option<i64>) -> Self {
        let count = data.len();
        Self { data, count, limit }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_serialization() {
        let response = ListResponse::new(vec![json!({"_id": "a"}), json!({"_id": "b"})], Some(2));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["limit"], 2);
    }

    #[test]
    fn test_list_response_without_limit() {
        let response = ListResponse::new(vec![json!(1)], None);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("limit").is_none());
    }

    #[test]
    fn test_single_response_serialization() {
        let response = SingleResponse::new(json!({"_id": "a", "owner": "Fry"}));

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"]["owner"], "Fry");
    }
}
