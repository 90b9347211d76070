use crate::domain::a001_purchase_order::aggregate::OrderLine;
use crate::domain::common::{AggregateRoot, DocumentStatus};
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Товарная накладная / delivery challan (агрегат a007)
///
/// Сопровождает отгрузку без счёта; позже может быть преобразована в счёт.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryChallan {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub challan_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub challan_date: NaiveDate,
    #[serde(default)]
    pub vehicle_number: Option<String>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for DeliveryChallan {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.challan_number
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "delivery_challans"
    }

    fn element_name() -> &'static str {
        "Delivery challan"
    }

    fn list_name() -> &'static str {
        "Delivery challans"
    }

    fn document_no_field() -> &'static str {
        "challanNumber"
    }
}

impl Searchable for DeliveryChallan {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.challan_number.as_str(), self.customer_name.as_str()];
        fields.extend(self.customer_phone.as_deref());
        fields.extend(self.vehicle_number.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}
