use serde::{Deserialize, Serialize};

/// Lifecycle status shared by order-like documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Unpaid,
    Paid,
    Converted,
    Cancelled,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Draft => "draft",
            DocumentStatus::Pending => "pending",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Unpaid => "unpaid",
            DocumentStatus::Paid => "paid",
            DocumentStatus::Converted => "converted",
            DocumentStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&DocumentStatus::Converted).unwrap();
        assert_eq!(json, "\"converted\"");
        let parsed: DocumentStatus = serde_json::from_str("\"unpaid\"").unwrap();
        assert_eq!(parsed, DocumentStatus::Unpaid);
    }
}
