//! Преобразование документов: КП -> счёт, накладная -> счёт,
//! заказ поставщику -> приобретение.

use chrono::NaiveDate;
use contracts::domain::a001_purchase_order::aggregate::PurchaseOrder;
use contracts::domain::a002_purchase::aggregate::Purchase;
use contracts::domain::a005_invoice::aggregate::Invoice;
use contracts::domain::a006_quotation::aggregate::Quotation;
use contracts::domain::a007_delivery_challan::aggregate::DeliveryChallan;
use contracts::domain::common::{AggregateRoot, DocumentStatus};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::error::DocumentError;

/// Parameters of the document being created
#[derive(Debug, Clone)]
pub struct NewDocument {
    pub id: String,
    pub number: String,
    pub date: NaiveDate,
}

/// Result of a conversion: the new record plus the source marked as converted
#[derive(Debug, Clone)]
pub struct Conversion {
    pub target_collection: &'static str,
    pub target: Value,
    pub source: Value,
}

pub fn quotation_to_invoice(quotation: &Quotation, new: NewDocument) -> Invoice {
    Invoice {
        id: new.id,
        invoice_number: new.number,
        customer_name: quotation.customer_name.clone(),
        customer_phone: quotation.customer_phone.clone(),
        invoice_date: new.date,
        due_date: None,
        status: DocumentStatus::Unpaid,
        lines: quotation.lines.clone(),
        total_amount: quotation.total_amount,
        source_document_id: Some(quotation.id.clone()),
        notes: Some(format!("Created from quotation {}", quotation.quotation_number)),
    }
}

pub fn challan_to_invoice(challan: &DeliveryChallan, new: NewDocument) -> Invoice {
    Invoice {
        id: new.id,
        invoice_number: new.number,
        customer_name: challan.customer_name.clone(),
        customer_phone: challan.customer_phone.clone(),
        invoice_date: new.date,
        due_date: None,
        status: DocumentStatus::Unpaid,
        lines: challan.lines.clone(),
        total_amount: challan.total_amount,
        source_document_id: Some(challan.id.clone()),
        notes: Some(format!("Created from delivery challan {}", challan.challan_number)),
    }
}

pub fn purchase_order_to_purchase(order: &PurchaseOrder, new: NewDocument) -> Purchase {
    Purchase {
        id: new.id,
        purchase_id: new.number,
        vendor_name: order.vendor_name.clone(),
        vendor_phone: order.vendor_phone.clone(),
        purchase_date: new.date,
        status: DocumentStatus::Unpaid,
        lines: order.lines.clone(),
        total_amount: order.total_amount,
        paid_amount: 0.0,
        source_order_id: Some(order.id.clone()),
        notes: Some(format!("Created from purchase order {}", order.purchase_order_id)),
    }
}

/// Collection a record of `source_collection` converts into
pub fn conversion_target(source_collection: &str) -> Result<&'static str, DocumentError> {
    if source_collection == Quotation::collection_name()
        || source_collection == DeliveryChallan::collection_name()
    {
        Ok(Invoice::collection_name())
    } else if source_collection == PurchaseOrder::collection_name() {
        Ok(Purchase::collection_name())
    } else {
        Err(DocumentError::ConversionUnsupported(
            source_collection.to_string(),
        ))
    }
}

/// Converts a stored record; `new` must be numbered for the target collection
pub fn convert(
    source_collection: &str,
    source: Value,
    new: NewDocument,
) -> Result<Conversion, DocumentError> {
    if source_collection == Quotation::collection_name() {
        convert_typed(source, new, quotation_status, quotation_to_invoice)
    } else if source_collection == DeliveryChallan::collection_name() {
        convert_typed(source, new, challan_status, challan_to_invoice)
    } else if source_collection == PurchaseOrder::collection_name() {
        convert_typed(source, new, order_status, purchase_order_to_purchase)
    } else {
        Err(DocumentError::ConversionUnsupported(
            source_collection.to_string(),
        ))
    }
}

fn quotation_status(q: &mut Quotation) -> &mut DocumentStatus {
    &mut q.status
}

fn challan_status(c: &mut DeliveryChallan) -> &mut DocumentStatus {
    &mut c.status
}

fn order_status(o: &mut PurchaseOrder) -> &mut DocumentStatus {
    &mut o.status
}

fn convert_typed<S, D>(
    source: Value,
    new: NewDocument,
    status: fn(&mut S) -> &mut DocumentStatus,
    build: fn(&S, NewDocument) -> D,
) -> Result<Conversion, DocumentError>
where
    S: AggregateRoot + DeserializeOwned + Serialize,
    D: AggregateRoot + Serialize,
{
    let mut record: S = from_value(source)?;
    if *status(&mut record) == DocumentStatus::Converted {
        return Err(DocumentError::AlreadyConverted(
            record.document_no().to_string(),
        ));
    }

    let target = build(&record, new);
    *status(&mut record) = DocumentStatus::Converted;

    Ok(Conversion {
        target_collection: D::collection_name(),
        target: to_value(&target)?,
        source: to_value(&record)?,
    })
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, DocumentError> {
    serde_json::from_value(value).map_err(|e| DocumentError::Malformed(e.to_string()))
}

fn to_value<T: Serialize>(record: &T) -> Result<Value, DocumentError> {
    serde_json::to_value(record).map_err(|e| DocumentError::Malformed(e.to_string()))
}
