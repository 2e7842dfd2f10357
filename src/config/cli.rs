use super::toml_config::TomlConfig;
use super::Settings;
use crate::core::form::{ProductForm, ServiceForm};
use crate::utils::error::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-desk")]
#[command(about = "Manage products and services of a remote catalog API")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog API base URL (overrides the config file)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    /// Listing format: table, json or csv
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List catalog items
    List {
        /// Only show items whose name contains this text
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Show one item as returned by the API
    Show { id: i64 },
    /// List units of measure
    Units,
    /// Create a product
    AddProduct(ProductArgs),
    /// Update a product
    EditProduct {
        id: i64,
        #[command(flatten)]
        form: ProductArgs,
    },
    /// Create a service
    AddService(ServiceArgs),
    /// Update a service
    EditService {
        id: i64,
        #[command(flatten)]
        form: ServiceArgs,
    },
    /// Delete an item by id
    Delete { id: i64 },
    /// Delete an item by name
    DeleteByName { name: String },
    /// Check an EAN-13 barcode
    CheckEan { code: String },
}

#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub barcode: String,
    /// Unit of measure id (see `units`)
    #[arg(long, default_value = "")]
    pub unit: String,
    #[arg(long, default_value = "", allow_negative_numbers = true)]
    pub temperature: String,
    #[arg(long, default_value = "", allow_negative_numbers = true)]
    pub min_stock: String,
    #[arg(long, default_value = "", allow_negative_numbers = true)]
    pub max_stock: String,
    #[arg(long, default_value = "", allow_negative_numbers = true)]
    pub reorder_point: String,
}

#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

impl From<&ProductArgs> for ProductForm {
    fn from(args: &ProductArgs) -> Self {
        ProductForm {
            name: args.name.clone(),
            description: args.description.clone(),
            barcode: args.barcode.clone(),
            unit_id: args.unit.clone(),
            temperature: args.temperature.clone(),
            min_stock: args.min_stock.clone(),
            max_stock: args.max_stock.clone(),
            reorder_point: args.reorder_point.clone(),
        }
    }
}

impl From<&ServiceArgs> for ServiceForm {
    fn from(args: &ServiceArgs) -> Self {
        ServiceForm {
            name: args.name.clone(),
            description: args.description.clone(),
        }
    }
}

impl Command {
    /// 只有條碼檢查可以在沒有 API 與設定的情況下執行
    pub fn needs_api(&self) -> bool {
        !matches!(self, Command::CheckEan { .. })
    }
}

impl CliConfig {
    /// 讀取設定檔 (若有) 再套用命令列覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Settings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Settings::default(),
        };

        if let Some(base_url) = &self.base_url {
            settings.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            settings.timeout = Some(Duration::from_secs(timeout));
        }
        if let Some(format) = &self.format {
            settings.format = format.parse()?;
        }

        Ok(settings)
    }
}
