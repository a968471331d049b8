// Wire envelopes shared by all endpoints
//
// Every successful response is wrapped in a `data` field; every error
// response is `{ "error": "<message>" }`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response wrapper for list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    /// Array of items returned by the list operation.
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Response wrapper for single-object endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error envelope returned with any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_shape() {
        let json = serde_json::to_value(ListResponse::new(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({ "data": [1, 2, 3] }));
    }

    #[test]
    fn test_data_response_shape() {
        let json = serde_json::to_value(DataResponse::new("ok")).unwrap();
        assert_eq!(json, serde_json::json!({ "data": "ok" }));
    }

    #[test]
    fn test_error_response_round_trip() {
        let parsed: ErrorResponse = serde_json::from_str(r#"{"error":"boom"}"#).unwrap();
        assert_eq!(parsed.error, "boom");
    }
}
