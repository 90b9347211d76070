use crate::domain::common::AggregateRoot;
use crate::shared::list::Searchable;
use serde::{Deserialize, Serialize};

/// Вид контрагента; используется как `entityFilter` списка
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterpartyKind {
    #[default]
    Customer,
    Vendor,
}

impl CounterpartyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CounterpartyKind::Customer => "customer",
            CounterpartyKind::Vendor => "vendor",
        }
    }
}

/// Контрагент: покупатель или поставщик (агрегат a008)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Counterparty {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub code: String,
    #[serde(default)]
    pub kind: CounterpartyKind,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub opening_balance: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Counterparty {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.code
    }

    fn aggregate_index() -> &'static str {
        "a008"
    }

    fn collection_name() -> &'static str {
        "counterparties"
    }

    fn element_name() -> &'static str {
        "Counterparty"
    }

    fn list_name() -> &'static str {
        "Customers & vendors"
    }

    fn document_no_field() -> &'static str {
        "code"
    }
}

impl Searchable for Counterparty {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.code.as_str(), self.name.as_str()];
        fields.extend(self.phone.as_deref());
        fields.extend(self.email.as_deref());
        fields.extend(self.notes.as_deref());
        fields
    }
}
