pub mod classify;
pub mod desk;
pub mod ean;
pub mod form;
pub mod listing;

pub use crate::domain::model::{CatalogRecord, ProductPayload, ServicePayload, UnitOfMeasure};
pub use crate::domain::ports::{CatalogApi, ConfigProvider};
pub use crate::utils::error::Result;
