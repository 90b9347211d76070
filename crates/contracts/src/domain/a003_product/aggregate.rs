use crate::domain::common::AggregateRoot;
use crate::shared::list::Searchable;
use serde::{Deserialize, Serialize};

/// Товар / услуга (агрегат a003)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
    pub unit_price: f64,
    #[serde(default)]
    pub stock_quantity: f64,
    #[serde(default)]
    pub description: Option<String>,
}

impl AggregateRoot for Product {
    fn id(&self) -> &str {
        &self.id
    }

    fn document_no(&self) -> &str {
        &self.sku
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "products"
    }

    fn element_name() -> &'static str {
        "Product"
    }

    fn list_name() -> &'static str {
        "Products"
    }

    fn document_no_field() -> &'static str {
        "sku"
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.sku.as_str(), self.name.as_str()];
        fields.extend(self.category.as_deref());
        fields.extend(self.description.as_deref());
        fields
    }
}
