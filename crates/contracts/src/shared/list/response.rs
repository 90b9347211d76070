use serde::{Deserialize, Serialize};

use super::query::DEFAULT_PAGE_SIZE;

/// Page state: `{ current, pageSize, total }`, `current` is one-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current: u64,
    pub page_size: u64,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current: 1,
            page_size: DEFAULT_PAGE_SIZE,
            total: 0,
        }
    }
}

impl Pagination {
    pub fn total_pages(&self) -> u64 {
        if self.page_size == 0 {
            return 0;
        }
        self.total.div_ceil(self.page_size)
    }
}

/// One page of records as returned by `GET /api/{collection}/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub records: Vec<T>,
    pub pagination: Pagination,
}

/// Outcome of delete / convert
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_wire_format() {
        let json = serde_json::to_value(Pagination {
            current: 2,
            page_size: 10,
            total: 25,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"current": 2, "pageSize": 10, "total": 25}));
    }

    #[test]
    fn test_total_pages() {
        let mut p = Pagination {
            current: 1,
            page_size: 10,
            total: 25,
        };
        assert_eq!(p.total_pages(), 3);
        p.total = 0;
        assert_eq!(p.total_pages(), 0);
    }

    #[test]
    fn test_action_response_without_message() {
        let parsed: ActionResponse = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.message, None);
    }
}
