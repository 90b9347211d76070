//! Коллекции документов и их метаданные
//!
//! Имя коллекции, поле номера документа и названия берутся из
//! `AggregateRoot` соответствующего агрегата.

use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a002_purchase::aggregate::Purchase;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::a005_invoice::aggregate::Invoice;
use contracts::domain::a006_quotation::aggregate::Quotation;
use contracts::domain::a007_delivery_challan::aggregate::DeliveryChallan;
use contracts::domain::a008_counterparty::aggregate::Counterparty;
use contracts::domain::a009_payment::aggregate::Payment;
use contracts::domain::common::AggregateRoot;
use once_cell::sync::Lazy;

use super::error::DocumentError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionDef {
    pub index: &'static str,
    pub collection: &'static str,
    pub element_name: &'static str,
    /// JSON field holding the document number
    pub number_field: &'static str,
    /// Prefix of generated numbers: `INV` -> `INV-0001`
    pub number_prefix: &'static str,
    /// JSON field matched by `entityFilter`
    pub scope_field: &'static str,
}

impl CollectionDef {
    fn of<T: AggregateRoot>(number_prefix: &'static str, scope_field: &'static str) -> Self {
        Self {
            index: T::aggregate_index(),
            collection: T::collection_name(),
            element_name: T::element_name(),
            number_field: T::document_no_field(),
            number_prefix,
            scope_field,
        }
    }
}

static COLLECTIONS: Lazy<Vec<CollectionDef>> = Lazy::new(|| {
    vec![
        CollectionDef::of::<PurchaseOrder>("PO", "status"),
        CollectionDef::of::<Purchase>("PUR", "status"),
        CollectionDef::of::<Product>("SKU", "category"),
        CollectionDef::of::<Expense>("EXP", "category"),
        CollectionDef::of::<Invoice>("INV", "status"),
        CollectionDef::of::<Quotation>("QT", "status"),
        CollectionDef::of::<DeliveryChallan>("DC", "status"),
        CollectionDef::of::<Counterparty>("CP", "kind"),
        CollectionDef::of::<Payment>("PAY", "direction"),
    ]
});

pub fn all_collections() -> &'static [CollectionDef] {
    &COLLECTIONS
}

pub fn find_collection(name: &str) -> Result<&'static CollectionDef, DocumentError> {
    COLLECTIONS
        .iter()
        .find(|def| def.collection == name)
        .ok_or_else(|| DocumentError::UnknownCollection(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_collection() {
        let def = find_collection("invoices").unwrap();
        assert_eq!(def.index, "a005");
        assert_eq!(def.number_field, "invoiceNumber");
        assert_eq!(def.scope_field, "status");

        assert_eq!(find_collection("counterparties").unwrap().scope_field, "kind");
        assert_eq!(find_collection("payments").unwrap().scope_field, "direction");
        assert_eq!(
            find_collection("users"),
            Err(DocumentError::UnknownCollection("users".to_string()))
        );
    }

    #[test]
    fn test_collections_are_unique() {
        let mut names: Vec<_> = all_collections().iter().map(|d| d.collection).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 9);
    }
}
