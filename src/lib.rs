pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command};
pub use config::Settings;

pub use adapters::HttpCatalogApi;
pub use core::classify::{is_service, ItemKind, SERVICE_BARCODE};
pub use core::desk::{CatalogDesk, Submission};
pub use core::ean::validate_ean13;
pub use core::form::{FormIssue, ValidationVerdict};
pub use utils::error::{CatalogError, Result};
