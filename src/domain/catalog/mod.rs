//! Service catalog consumed by the knowledge base and pricing.

mod service_catalog;

pub use service_catalog::{CatalogError, PriceUnit, ServiceCatalog, ServiceCategory, SubService, TaxEligibility};
