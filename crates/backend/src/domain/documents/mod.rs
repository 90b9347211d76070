pub mod conversion;
pub mod error;
pub mod list_engine;
pub mod numbering;
pub mod registry;
pub mod repository;
pub mod seed;
pub mod service;

pub use error::DocumentError;
pub use registry::{find_collection, CollectionDef};
