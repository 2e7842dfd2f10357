use serde::{Deserialize, Deserializer, Serialize};

/// 詳細清單中的一列 (`GET /api/produtos/detalhes`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(rename = "id_produto", default)]
    pub id: Option<i64>,

    #[serde(rename = "nomeProduto", default)]
    pub name: Option<String>,

    #[serde(rename = "descricao_produto", default)]
    pub description: Option<String>,

    #[serde(
        rename = "codg_barras_prod",
        default,
        deserialize_with = "barcode_as_string"
    )]
    pub barcode: Option<String>,

    #[serde(rename = "temperatura_produto", default)]
    pub temperature: Option<f64>,

    #[serde(rename = "estoque_minimo", default)]
    pub min_stock: Option<i64>,

    #[serde(rename = "estoque_maximo", default)]
    pub max_stock: Option<i64>,

    #[serde(rename = "ponto_abastecimento", default)]
    pub reorder_point: Option<i64>,

    #[serde(rename = "unidade_medida", default)]
    pub unit: Option<String>,
}

// 有些後端把條碼當數字回傳
fn barcode_as_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitOfMeasure {
    pub id: i64,
    #[serde(rename = "abreviacao")]
    pub abbreviation: String,
    #[serde(rename = "descricao")]
    pub description: String,
}

impl UnitOfMeasure {
    pub fn label(&self) -> String {
        format!("{} - {}", self.abbreviation, self.description)
    }
}

/// 商品新增/更新的請求內容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(rename = "id_produto", skip_serializing_if = "Option::is_none", default)]
    pub id: Option<i64>,

    #[serde(rename = "nomeProduto")]
    pub name: String,

    #[serde(rename = "descricao_produto")]
    pub description: String,

    #[serde(rename = "codg_barras_prod")]
    pub barcode: String,

    #[serde(rename = "id_unmedida")]
    pub unit_id: Option<i64>,

    #[serde(rename = "temperatura_produto")]
    pub temperature: Option<f64>,

    #[serde(rename = "estoque_minimo")]
    pub min_stock: Option<i64>,

    #[serde(rename = "estoque_maximo")]
    pub max_stock: Option<i64>,

    #[serde(rename = "ponto_abastecimento")]
    pub reorder_point: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePayload {
    #[serde(rename = "nomeProduto")]
    pub name: String,

    #[serde(rename = "descricao_produto")]
    pub description: String,
}
