//! Common types and traits for all aggregates

pub mod aggregate_root;
pub mod document_status;

// Re-exports
pub use aggregate_root::AggregateRoot;
pub use document_status::DocumentStatus;
