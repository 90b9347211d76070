//! Демо-данные для пустой базы

use anyhow::Result;
use chrono::NaiveDate;
use contracts::domain::a001_purchase_order::aggregate::{OrderLine, PurchaseOrder};
use contracts::domain::a002_purchase::aggregate::Purchase;
use contracts::domain::a003_product::aggregate::Product;
use contracts::domain::a004_expense::aggregate::Expense;
use contracts::domain::a005_invoice::aggregate::Invoice;
use contracts::domain::a006_quotation::aggregate::Quotation;
use contracts::domain::a007_delivery_challan::aggregate::DeliveryChallan;
use contracts::domain::a008_counterparty::aggregate::{Counterparty, CounterpartyKind};
use contracts::domain::a009_payment::aggregate::{Payment, PaymentDirection};
use contracts::domain::common::{AggregateRoot, DocumentStatus};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use super::numbering::format_number;
use super::registry::{all_collections, find_collection};
use super::repository;

/// One seed record: collection, document number, JSON body
pub struct SeedRecord {
    pub collection: &'static str,
    pub code: String,
    pub data: Value,
}

fn record<T: AggregateRoot + Serialize>(build: impl FnOnce(String) -> T) -> Result<SeedRecord> {
    let value = build(Uuid::new_v4().to_string());
    Ok(SeedRecord {
        collection: T::collection_name(),
        code: value.document_no().to_string(),
        data: serde_json::to_value(&value)?,
    })
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, day).unwrap_or_default()
}

fn number(collection: &str, sequence: u64) -> String {
    let prefix = find_collection(collection)
        .map(|def| def.number_prefix)
        .unwrap_or("DOC");
    format_number(prefix, sequence)
}

fn line(product: &str, description: &str, quantity: f64, unit_price: f64) -> OrderLine {
    OrderLine {
        product_id: product.to_string(),
        description: description.to_string(),
        quantity,
        unit_price,
    }
}

fn total(lines: &[OrderLine]) -> f64 {
    lines.iter().map(OrderLine::amount).sum()
}

const CUSTOMERS: [(&str, &str); 4] = [
    ("Sharma Traders", "+91 98200 11111"),
    ("Blue Lotus Cafe", "+91 98200 22222"),
    ("Northwind Retail", "+91 98200 33333"),
    ("Anand Hardware", "+91 98200 44444"),
];

const VENDORS: [(&str, &str); 3] = [
    ("Metro Steel Supply", "+91 99300 10101"),
    ("Acme Packaging", "+91 99300 20202"),
    ("Kaveri Paper Mills", "+91 99300 30303"),
];

const PRODUCTS: [(&str, &str, &str, f64); 5] = [
    ("Steel rod 12mm", "Metal", "pcs", 250.0),
    ("Carton box L", "Packaging", "pcs", 18.5),
    ("A4 paper ream", "Stationery", "ream", 310.0),
    ("Hex bolt M8", "Metal", "box", 95.0),
    ("Installation service", "Services", "hour", 800.0),
];

fn sales_lines(seed: usize) -> Vec<OrderLine> {
    let (name, _, _, price) = PRODUCTS[seed % PRODUCTS.len()];
    let (extra, _, _, extra_price) = PRODUCTS[(seed + 2) % PRODUCTS.len()];
    let sku = |index: usize| number("products", (index % PRODUCTS.len()) as u64 + 1);
    vec![
        line(&sku(seed), name, (seed % 4 + 1) as f64, price),
        line(&sku(seed + 2), extra, 2.0, extra_price),
    ]
}

pub fn demo_records() -> Result<Vec<SeedRecord>> {
    let mut records = Vec::new();

    for (i, (name, category, unit, price)) in PRODUCTS.iter().enumerate() {
        records.push(record(|id| Product {
            id,
            sku: number("products", i as u64 + 1),
            name: name.to_string(),
            category: Some(category.to_string()),
            unit: Some(unit.to_string()),
            unit_price: *price,
            stock_quantity: (i * 40 + 10) as f64,
            description: None,
        })?);
    }

    let parties = CUSTOMERS
        .iter()
        .map(|c| (c, CounterpartyKind::Customer))
        .chain(VENDORS.iter().map(|v| (v, CounterpartyKind::Vendor)));
    for (i, ((name, phone), kind)) in parties.enumerate() {
        records.push(record(|id| Counterparty {
            id,
            code: number("counterparties", i as u64 + 1),
            kind,
            name: name.to_string(),
            phone: Some(phone.to_string()),
            email: Some(format!("accounts{}@example.com", i + 1)),
            tax_id: None,
            address: None,
            opening_balance: 0.0,
            notes: None,
        })?);
    }

    let statuses = [
        DocumentStatus::Draft,
        DocumentStatus::Pending,
        DocumentStatus::Approved,
    ];
    for i in 0..6 {
        let (vendor, phone) = VENDORS[i % VENDORS.len()];
        let lines = sales_lines(i);
        records.push(record(|id| PurchaseOrder {
            id,
            purchase_order_id: number("purchase_orders", i as u64 + 1),
            vendor_name: vendor.to_string(),
            vendor_phone: Some(phone.to_string()),
            order_date: date(3, 2 + i as u32 * 3),
            expected_date: Some(date(4, 1 + i as u32 * 2)),
            status: statuses[i % statuses.len()],
            total_amount: total(&lines),
            lines: lines.clone(),
            notes: None,
        })?);
    }

    for i in 0..4 {
        let (vendor, phone) = VENDORS[(i + 1) % VENDORS.len()];
        let lines = sales_lines(i + 1);
        let amount = total(&lines);
        records.push(record(|id| Purchase {
            id,
            purchase_id: number("purchases", i as u64 + 1),
            vendor_name: vendor.to_string(),
            vendor_phone: Some(phone.to_string()),
            purchase_date: date(4, 3 + i as u32 * 4),
            status: if i % 2 == 0 { DocumentStatus::Paid } else { DocumentStatus::Unpaid },
            lines: lines.clone(),
            total_amount: amount,
            paid_amount: if i % 2 == 0 { amount } else { 0.0 },
            source_order_id: None,
            notes: None,
        })?);
    }

    let expense_kinds = [
        ("Rent", "City Estates", "bank"),
        ("Utilities", "State Power Co", "upi"),
        ("Travel", "Rapid Cabs", "cash"),
        ("Office", "Kaveri Paper Mills", "card"),
    ];
    for (i, (category, payee, method)) in expense_kinds.iter().enumerate() {
        records.push(record(|id| Expense {
            id,
            expense_id: number("expenses", i as u64 + 1),
            category: category.to_string(),
            payee_name: payee.to_string(),
            amount: 1500.0 * (i + 1) as f64,
            expense_date: date(4, 5 + i as u32 * 5),
            payment_method: Some(method.to_string()),
            notes: None,
        })?);
    }

    for i in 0..12 {
        let (customer, phone) = CUSTOMERS[i % CUSTOMERS.len()];
        let lines = sales_lines(i);
        records.push(record(|id| Invoice {
            id,
            invoice_number: number("invoices", i as u64 + 1),
            customer_name: customer.to_string(),
            customer_phone: Some(phone.to_string()),
            invoice_date: date(1 + (i / 4) as u32, 3 + (i % 4) as u32 * 6),
            due_date: Some(date(2 + (i / 4) as u32, 3 + (i % 4) as u32 * 6)),
            status: if i % 3 == 0 { DocumentStatus::Paid } else { DocumentStatus::Unpaid },
            total_amount: total(&lines),
            lines: lines.clone(),
            source_document_id: None,
            notes: None,
        })?);
    }

    for i in 0..5 {
        let (customer, phone) = CUSTOMERS[(i + 1) % CUSTOMERS.len()];
        let lines = sales_lines(i + 3);
        records.push(record(|id| Quotation {
            id,
            quotation_number: number("quotations", i as u64 + 1),
            customer_name: customer.to_string(),
            customer_phone: Some(phone.to_string()),
            quotation_date: date(5, 2 + i as u32 * 3),
            valid_until: Some(date(6, 2 + i as u32 * 3)),
            status: statuses[i % statuses.len()],
            total_amount: total(&lines),
            lines: lines.clone(),
            notes: None,
        })?);
    }

    for i in 0..3 {
        let (customer, phone) = CUSTOMERS[(i + 2) % CUSTOMERS.len()];
        let lines = sales_lines(i + 4);
        records.push(record(|id| DeliveryChallan {
            id,
            challan_number: number("delivery_challans", i as u64 + 1),
            customer_name: customer.to_string(),
            customer_phone: Some(phone.to_string()),
            challan_date: date(5, 10 + i as u32 * 4),
            vehicle_number: Some(format!("MH-12-AB-{:04}", 1200 + i * 7)),
            status: DocumentStatus::Pending,
            total_amount: total(&lines),
            lines: lines.clone(),
            notes: None,
        })?);
    }

    for i in 0..6 {
        let incoming = i % 2 == 0;
        let (party, phone) = if incoming {
            CUSTOMERS[i % CUSTOMERS.len()]
        } else {
            VENDORS[i % VENDORS.len()]
        };
        records.push(record(|id| Payment {
            id,
            payment_number: number("payments", i as u64 + 1),
            direction: if incoming { PaymentDirection::Incoming } else { PaymentDirection::Outgoing },
            counterparty_name: party.to_string(),
            counterparty_phone: Some(phone.to_string()),
            amount: 2000.0 + 750.0 * i as f64,
            payment_date: date(4, 2 + i as u32 * 4),
            method: Some(if incoming { "upi" } else { "bank" }.to_string()),
            reference_no: Some(format!("TXN{:06}", 400100 + i)),
            document_id: None,
            notes: None,
        })?);
    }

    Ok(records)
}

/// Заполняет пустые коллекции демо-записями
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    let records = demo_records()?;
    for def in all_collections() {
        if repository::count_all(db, def.collection).await? > 0 {
            continue;
        }
        let mut inserted = 0;
        for seed in records.iter().filter(|r| r.collection == def.collection) {
            let id = seed
                .data
                .get("_id")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            repository::insert(db, def.collection, &id, &seed.code, &seed.data).await?;
            inserted += 1;
        }
        tracing::info!("Seeded {} demo records into {}", inserted, def.collection);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_collection_gets_demo_records() {
        let records = demo_records().unwrap();
        for def in all_collections() {
            assert!(
                records.iter().any(|r| r.collection == def.collection),
                "no demo data for {}",
                def.collection
            );
        }
    }

    #[test]
    fn test_demo_records_round_trip_and_carry_their_number() {
        let records = demo_records().unwrap();
        let invoice = records
            .iter()
            .find(|r| r.collection == "invoices")
            .unwrap();
        let parsed: Invoice = serde_json::from_value(invoice.data.clone()).unwrap();
        assert_eq!(parsed.invoice_number, invoice.code);
        assert!(parsed.invoice_number.starts_with("INV-"));
        assert!(!parsed.id.is_empty());
        assert!(parsed.total_amount > 0.0);
    }

    #[test]
    fn test_demo_numbers_are_unique_per_collection() {
        let records = demo_records().unwrap();
        for def in all_collections() {
            let mut codes: Vec<_> = records
                .iter()
                .filter(|r| r.collection == def.collection)
                .map(|r| r.code.as_str())
                .collect();
            let count = codes.len();
            codes.sort();
            codes.dedup();
            assert_eq!(codes.len(), count, "{}", def.collection);
        }
    }

    #[tokio::test]
    async fn test_seeding_fills_empty_collections_once() {
        let dir = tempfile::tempdir().unwrap();
        let db = crate::shared::data::db::open_database(&dir.path().join("seed.db"))
            .await
            .unwrap();

        seed_demo_data(&db).await.unwrap();
        let invoices = repository::count_all(&db, "invoices").await.unwrap();
        assert!(invoices > 0);

        seed_demo_data(&db).await.unwrap();
        assert_eq!(repository::count_all(&db, "invoices").await.unwrap(), invoices);
    }
}
