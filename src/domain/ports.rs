use crate::domain::model::{CatalogRecord, ProductPayload, ServicePayload, UnitOfMeasure};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
    fn headers(&self) -> &HashMap<String, String>;
}

/// 遠端商品目錄 API
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn list_detailed(&self) -> Result<Vec<CatalogRecord>>;
    async fn get_product(&self, id: i64) -> Result<serde_json::Value>;
    async fn list_units(&self) -> Result<Vec<UnitOfMeasure>>;
    async fn create_product(&self, payload: &ProductPayload) -> Result<serde_json::Value>;
    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<serde_json::Value>;
    async fn create_service(&self, payload: &ServicePayload) -> Result<serde_json::Value>;
    async fn update_service(&self, id: i64, payload: &ServicePayload) -> Result<serde_json::Value>;
    async fn delete_product(&self, id: i64) -> Result<()>;
    async fn delete_product_by_name(&self, name: &str) -> Result<()>;
}
