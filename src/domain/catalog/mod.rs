//! Career catalog - static taxonomy reference data.
//!
//! The catalog is loaded once and treated as immutable configuration;
//! every ranking call reads it without coordination.

mod builtin;
mod category;
mod entry;

pub use builtin::builtin_catalog;
pub use category::CareerCategory;
pub use entry::{Catalog, CatalogEntry};
