use crate::domain::a001_purchase_order::aggregate::OrderLine;
use crate::domain::common::{AggregateRoot, DocumentStatus};
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Приобретение товаров (агрегат a002)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Purchase {
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Номер документа (напр. "PUR-0001")
    pub purchase_id: String,

    pub vendor_name: String,
    #[serde(default)]
    pub vendor_phone: Option<String>,

    pub purchase_date: NaiveDate,

    #[serde(default)]
    pub status: DocumentStatus,

    #[serde(default)]
    pub lines: Vec<OrderLine>,

    pub total_amount: f64,
    #[serde(default)]
    pub paid_amount: f64,

    /// Заказ поставщику, из которого создан документ
    #[serde(default)]
    pub source_order_id: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl Purchase {
    pub fn balance_due(&self) -> f64 {
        self.total_amount - self.paid_amount
    }
}

impl AggregateRoot for Purchase {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.purchase_id
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "purchases"
    }

    fn element_name() -> &'static str {
        "Purchase"
    }

    fn list_name() -> &'static str {
        "Purchases"
    }

    fn document_no_field() -> &'static str {
        "purchaseId"
    }
}

impl Searchable for Purchase {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.purchase_id.as_str(), self.vendor_name.as_str()];
        fields.extend(self.vendor_phone.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}
