use crate::core::form::{validate_product, validate_service, ProductForm, ServiceForm};
use crate::core::listing::{build_rows, CatalogRow};
use crate::domain::model::UnitOfMeasure;
use crate::domain::ports::CatalogApi;
use crate::utils::error::Result;

/// 送出成功後的訊息與重新載入的清單。
///
/// The mutation has already been accepted when a `Submission` exists, so a
/// failed reload is carried in `rows` instead of failing the whole call.
#[derive(Debug)]
pub struct Submission {
    pub message: &'static str,
    pub rows: Result<Vec<CatalogRow>>,
}

/// Validates a form, sends it, then reloads the list. Calls are sequential.
pub struct CatalogDesk<A: CatalogApi> {
    api: A,
}

impl<A: CatalogApi> CatalogDesk<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn load_units(&self) -> Result<Vec<UnitOfMeasure>> {
        let units = self.api.list_units().await?;
        tracing::debug!("Loaded {} units of measure", units.len());
        Ok(units)
    }

    pub async fn load_rows(&self) -> Result<Vec<CatalogRow>> {
        let records = self.api.list_detailed().await?;
        let rows = build_rows(&records);
        tracing::info!(
            "📦 Loaded {} catalog rows ({} services)",
            rows.len(),
            rows.iter().filter(|r| r.is_service).count()
        );
        Ok(rows)
    }

    async fn reload(&self, message: &'static str) -> Submission {
        let rows = self.load_rows().await;
        if let Err(e) = &rows {
            tracing::warn!("⚠️ {}, but reloading the list failed: {}", message, e);
        }
        Submission { message, rows }
    }

    pub async fn submit_product(&self, form: &ProductForm, editing: Option<i64>) -> Result<Submission> {
        let payload = form.to_payload(editing)?;
        if let Err(issue) = validate_product(&payload).into_result() {
            tracing::warn!("⛔ Product form blocked: {}", issue);
            return Err(issue.into());
        }

        let message = match editing {
            Some(id) => {
                tracing::info!("✏️ Updating product {}", id);
                self.api.update_product(id, &payload).await?;
                "Product updated"
            }
            None => {
                tracing::info!("➕ Creating product '{}'", payload.name);
                self.api.create_product(&payload).await?;
                "Product saved"
            }
        };

        Ok(self.reload(message).await)
    }

    pub async fn submit_service(&self, form: &ServiceForm, editing: Option<i64>) -> Result<Submission> {
        let payload = form.to_payload();
        if let Err(issue) = validate_service(&payload).into_result() {
            tracing::warn!("⛔ Service form blocked: {}", issue);
            return Err(issue.into());
        }

        let message = match editing {
            Some(id) => {
                tracing::info!("✏️ Updating service {}", id);
                self.api.update_service(id, &payload).await?;
                "Service updated"
            }
            None => {
                tracing::info!("➕ Creating service '{}'", payload.name);
                self.api.create_service(&payload).await?;
                "Service saved"
            }
        };

        Ok(self.reload(message).await)
    }

    pub async fn delete_item(&self, id: i64) -> Result<Submission> {
        tracing::info!("🗑️ Deleting item {}", id);
        self.api.delete_product(id).await?;
        Ok(self.reload("Item deleted").await)
    }

    pub async fn delete_by_name(&self, name: &str) -> Result<Submission> {
        let name = name.trim();
        tracing::info!("🗑️ Deleting item named '{}'", name);
        self.api.delete_product_by_name(name).await?;
        Ok(self.reload("Item deleted").await)
    }
}
