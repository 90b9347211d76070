pub mod common;

pub mod a001_purchase_order;
pub mod a002_purchase;
pub mod a003_product;
pub mod a004_expense;
pub mod a005_invoice;
pub mod a006_quotation;
pub mod a007_delivery_challan;
pub mod a008_counterparty;
pub mod a009_payment;
