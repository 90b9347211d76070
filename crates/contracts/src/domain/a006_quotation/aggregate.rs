use crate::domain::a001_purchase_order::aggregate::OrderLine;
use crate::domain::common::{AggregateRoot, DocumentStatus};
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Коммерческое предложение (агрегат a006)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Quotation {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub quotation_number: String,
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,
    pub quotation_date: NaiveDate,
    #[serde(default)]
    pub valid_until: Option<NaiveDate>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    pub total_amount: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Quotation {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.quotation_number
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "quotations"
    }

    fn element_name() -> &'static str {
        "Quotation"
    }

    fn list_name() -> &'static str {
        "Quotations"
    }

    fn document_no_field() -> &'static str {
        "quotationNumber"
    }
}

impl Searchable for Quotation {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.quotation_number.as_str(), self.customer_name.as_str()];
        fields.extend(self.customer_phone.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}
