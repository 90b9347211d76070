use crate::domain::common::AggregateRoot;
use crate::shared::list::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Расход (агрегат a004)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub expense_id: String,
    pub category: String,
    pub payee_name: String,
    pub amount: f64,
    pub expense_date: NaiveDate,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl AggregateRoot for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.expense_id
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "expenses"
    }

    fn element_name() -> &'static str {
        "Expense"
    }

    fn list_name() -> &'static str {
        "Expenses"
    }

    fn document_no_field() -> &'static str {
        "expenseId"
    }
}

impl Searchable for Expense {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.expense_id.as_str(),
            self.payee_name.as_str(),
            self.category.as_str(),
        ];
        fields.extend(self.notes.as_deref());
        fields
    }
}
