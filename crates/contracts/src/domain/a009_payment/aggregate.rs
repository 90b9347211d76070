use crate::domain::common::AggregateRoot;
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentDirection {
    /// Поступление от покупателя
    #[default]
    Incoming,
    /// Оплата поставщику
    Outgoing,
}

impl PaymentDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentDirection::Incoming => "incoming",
            PaymentDirection::Outgoing => "outgoing",
        }
    }
}

/// Платёж (агрегат a009)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub payment_number: String,
    #[serde(default)]
    pub direction: PaymentDirection,
    pub counterparty_name: String,
    #[serde(default)]
    pub counterparty_phone: Option<String>,
    pub amount: f64,
    pub payment_date: NaiveDate,
    #[serde(default)]
    pub method: Option<String>,
    /// Номер банковской операции / чека
    #[serde(default)]
    pub reference_no: Option<String>,
    /// Оплачиваемый документ (счёт или приобретение)
    #[serde(default)]
    pub document_id: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Payment {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.payment_number
    }

    fn aggregate_index() -> &'static str {
        "a009"
    }

    fn collection_name() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }

    fn document_no_field() -> &'static str {
        "paymentNumber"
    }
}

impl Searchable for Payment {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.payment_number.as_str(),
            self.counterparty_name.as_str(),
        ];
        fields.extend(self.counterparty_phone.as_deref());
        fields.extend(self.reference_no.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}
