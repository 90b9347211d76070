use crate::domain::common::{AggregateRoot, DocumentStatus};
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Строка заказа поставщику
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: String,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn amount(&self) -> f64 {
        self.quantity * self.unit_price
    }
}

/// Заказ поставщику (агрегат a001)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Номер заказа (напр. "PO-1002")
    pub purchase_order_id: String,

    pub vendor_name: String,
    #[serde(default)]
    pub vendor_phone: Option<String>,

    pub order_date: NaiveDate,
    #[serde(default)]
    pub expected_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: DocumentStatus,

    #[serde(default)]
    pub lines: Vec<OrderLine>,

    pub total_amount: f64,

    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for PurchaseOrder {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.purchase_order_id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "purchase_orders"
    }

    fn element_name() -> &'static str {
        "Purchase order"
    }

    fn list_name() -> &'static str {
        "Purchase orders"
    }

    fn document_no_field() -> &'static str {
        "purchaseOrderId"
    }
}

impl Searchable for PurchaseOrder {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.purchase_order_id.as_str(), self.vendor_name.as_str()];
        fields.extend(self.vendor_phone.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_backend_document() {
        let json = r#"{
            "_id": "65f1c0",
            "purchaseOrderId": "PO-1002",
            "vendorName": "Acme Supplies",
            "orderDate": "2024-03-15",
            "status": "approved",
            "totalAmount": 1250.5
        }"#;
        let order: PurchaseOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.id(), "65f1c0");
        assert_eq!(order.document_no(), "PO-1002");
        assert_eq!(order.status, DocumentStatus::Approved);
        assert!(order.lines.is_empty());
        assert!(order.matches_filter("po-1002"));
        assert!(order.matches_filter("acme"));
    }
}
