// Service exports
pub mod catalog;
pub mod model_store;

pub use catalog::{load_catalog, parse_catalog, CatalogError};
pub use model_store::{load_model, ModelLoadError};
