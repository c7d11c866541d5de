mod catalog_service;
mod region_catalog;
pub mod region_source;

pub use catalog_service::RegionCatalogService;
pub use region_catalog::{CatalogError, RegionCatalog};
pub use region_source::RegionSource;
