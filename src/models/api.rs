use serde::{Deserialize, Serialize};

/// Paginated collection shape reserved for future list endpoints. Nothing
/// serves pages yet; the type pins the JSON layout both runtimes expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// Page bookkeeping for [`PaginatedResponse`]. The page URLs at the ends of
/// the range are nullable on the wire, not absent, so the options here
/// serialize as `null` rather than dropping the key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub total: i64,
    pub per_page: i64,
    pub current_page: i64,
    pub last_page: i64,
    pub first_page: i64,
    pub first_page_url: String,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub previous_page_url: Option<String>,
}

/// Error payload for failures reported outside the response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_page() -> PaginatedResponse<String> {
        PaginatedResponse {
            data: vec!["only".to_string()],
            meta: PaginationMeta {
                total: 1,
                per_page: 10,
                current_page: 1,
                last_page: 1,
                first_page: 1,
                first_page_url: "/?page=1".to_string(),
                last_page_url: "/?page=1".to_string(),
                next_page_url: None,
                previous_page_url: None,
            },
        }
    }

    #[test]
    fn test_meta_serializes_in_camel_case() {
        let json = serde_json::to_value(&single_page()).unwrap();

        assert_eq!(json["meta"]["perPage"], 10);
        assert_eq!(json["meta"]["currentPage"], 1);
        assert!(json["meta"].get("per_page").is_none());
    }

    #[test]
    fn test_page_urls_serialize_as_null_not_absent() {
        // A single page has no neighbors, but the keys still appear
        let json = serde_json::to_value(&single_page()).unwrap();

        assert_eq!(json["meta"]["nextPageUrl"], serde_json::Value::Null);
        let meta = json["meta"].as_object().unwrap();
        assert!(meta.contains_key("nextPageUrl"));
        assert!(meta.contains_key("previousPageUrl"));
    }

    #[test]
    fn test_paginated_response_round_trips() {
        let page = single_page();
        let raw = serde_json::to_string(&page).unwrap();
        let back: PaginatedResponse<String> = serde_json::from_str(&raw).unwrap();

        assert_eq!(back, page);
    }

    #[test]
    fn test_api_error_code_is_optional() {
        let error: ApiError =
            serde_json::from_str(r#"{"message": "Not found", "status": 404}"#).unwrap();
        assert_eq!(error.status, 404);
        assert!(error.code.is_none());

        // Omitted code stays omitted on the way back out
        let json = serde_json::to_string(&error).unwrap();
        assert!(!json.contains("code"));
    }
}
