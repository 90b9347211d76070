use crate::domain::a001_purchase_order::aggregate::OrderLine;
use crate::domain::common::{AggregateRoot, DocumentStatus};
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Счёт покупателю (агрегат a005)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Номер счёта (напр. "INV-0042")
    pub invoice_number: String,

    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: Option<String>,

    pub invoice_date: NaiveDate,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub status: DocumentStatus,

    #[serde(default)]
    pub lines: Vec<OrderLine>,

    pub total_amount: f64,

    /// Документ-основание (коммерческое предложение или накладная)
    #[serde(default)]
    pub source_document_id: Option<String>,

    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Invoice {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.invoice_number
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "invoices"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }

    fn document_no_field() -> &'static str {
        "invoiceNumber"
    }
}

impl Searchable for Invoice {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.invoice_number.as_str(), self.customer_name.as_str()];
        fields.extend(self.customer_phone.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}
