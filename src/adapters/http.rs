use crate::domain::model::{CatalogRecord, ProductPayload, ServicePayload, UnitOfMeasure};
use crate::domain::ports::{CatalogApi, ConfigProvider};
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

const ERROR_BODY_LIMIT: usize = 200;

/// 以 reqwest 實作的目錄 API 客戶端
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    client: Client,
    base: Url,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl HttpCatalogApi {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        // 結尾補上斜線，避免 join 時吃掉路徑前綴
        let mut base = config.base_url().trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }

        Ok(Self {
            client: Client::new(),
            base: Url::parse(&base)?,
            timeout: config.timeout(),
            headers: config.headers().clone(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("📡 {} {}", method, url);
        let mut request = self.client.request(method, url);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        request
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 API response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        // 讀不到內容時退回狀態碼訊息
        let body = response.text().await.unwrap_or_default();
        let err = api_error(status.as_u16(), &body);
        tracing::error!("❌ API request failed: {}", err);
        Err(err)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        let response = self.send(self.request(Method::GET, url)).await?;
        Ok(response.json().await?)
    }

    async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<serde_json::Value> {
        let url = self.endpoint(path)?;
        let response = self.send(self.request(method, url).json(body)).await?;
        read_optional_json(response).await
    }
}

/// 2xx 的回應內容只當參考：讀不到或不是 JSON 都不影響結果
async fn read_optional_json(response: Response) -> Result<serde_json::Value> {
    let text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("⚠️ Could not read the success response body: {}", e);
            return Ok(serde_json::Value::Null);
        }
    };
    if text.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
}

fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}

/// 取前 `limit` 個 UTF-16 單位，不切開代理對
fn utf16_prefix(s: &str, limit: usize) -> &str {
    let mut units = 0;
    for (idx, ch) in s.char_indices() {
        units += ch.len_utf16();
        if units > limit {
            return &s[..idx];
        }
    }
    s
}

/// 把失敗回應轉成錯誤訊息：JSON 取 message 或 error，其餘截斷原文
pub fn api_error(status: u16, body: &str) -> CatalogError {
    let fallback = format!("HTTP {}", status);

    let message = if body.is_empty() {
        fallback
    } else {
        match serde_json::from_str::<serde_json::Value>(body) {
            Ok(json) => ["message", "error"]
                .iter()
                .filter_map(|key| json.get(*key))
                .filter_map(|value| match value {
                    serde_json::Value::String(s) if s.is_empty() => None,
                    serde_json::Value::String(s) => Some(s.clone()),
                    serde_json::Value::Null | serde_json::Value::Bool(false) => None,
                    serde_json::Value::Number(n) if n.as_f64() == Some(0.0) => None,
                    other => Some(other.to_string()),
                })
                .next()
                .unwrap_or(fallback),
            Err(_) if utf16_len(body) > ERROR_BODY_LIMIT => {
                format!("{}...", utf16_prefix(body, ERROR_BODY_LIMIT))
            }
            Err(_) => body.to_string(),
        }
    };

    CatalogError::ApiError { status, message }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn list_detailed(&self) -> Result<Vec<CatalogRecord>> {
        self.get_json("api/produtos/detalhes").await
    }

    async fn get_product(&self, id: i64) -> Result<serde_json::Value> {
        self.get_json(&format!("api/produtos/{}", id)).await
    }

    async fn list_units(&self) -> Result<Vec<UnitOfMeasure>> {
        self.get_json("api/unidades-medida").await
    }

    async fn create_product(&self, payload: &ProductPayload) -> Result<serde_json::Value> {
        self.send_json(Method::POST, "api/produtos", payload).await
    }

    async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<serde_json::Value> {
        self.send_json(Method::PUT, &format!("api/produtos/{}", id), payload)
            .await
    }

    async fn create_service(&self, payload: &ServicePayload) -> Result<serde_json::Value> {
        self.send_json(Method::POST, "api/servicos", payload).await
    }

    async fn update_service(&self, id: i64, payload: &ServicePayload) -> Result<serde_json::Value> {
        self.send_json(Method::PUT, &format!("api/servicos/{}", id), payload)
            .await
    }

    async fn delete_product(&self, id: i64) -> Result<()> {
        let url = self.endpoint(&format!("api/produtos/{}", id))?;
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    async fn delete_product_by_name(&self, name: &str) -> Result<()> {
        let mut url = self.endpoint("api/produtos/nome")?;
        url.query_pairs_mut().append_pair("nome", name);
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}
