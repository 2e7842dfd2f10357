use crate::core::ean::validate_ean13;
use crate::domain::model::{ProductPayload, ServicePayload};
use thiserror::Error;

pub const SERVICE_NAME_MAX: usize = 50;
pub const SERVICE_DESCRIPTION_MAX: usize = 250;

/// 表單無法送出的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    #[error("Enter a name and a description")]
    MissingNameOrDescription,

    #[error("A unit of measure is required")]
    MissingUnit,

    #[error("A barcode is required")]
    MissingBarcode,

    #[error("Invalid barcode, enter a valid EAN-13")]
    InvalidBarcode,

    #[error("Minimum stock, maximum stock and reorder point cannot be negative")]
    NegativeStock,

    #[error("Maximum stock must be greater than minimum stock")]
    MaxNotAboveMin,

    #[error("Reorder point must be greater than minimum and at most maximum")]
    ReorderOutOfRange,

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    Invalid(FormIssue),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    pub fn into_result(self) -> std::result::Result<(), FormIssue> {
        match self {
            ValidationVerdict::Valid => Ok(()),
            ValidationVerdict::Invalid(issue) => Err(issue),
        }
    }
}

/// 商品表單的原始輸入
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub barcode: String,
    pub unit_id: String,
    pub temperature: String,
    pub min_stock: String,
    pub max_stock: String,
    pub reorder_point: String,
}

impl ProductForm {
    pub fn to_payload(&self, editing: Option<i64>) -> std::result::Result<ProductPayload, FormIssue> {
        Ok(ProductPayload {
            id: editing,
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            barcode: self.barcode.trim().to_string(),
            unit_id: parse_int("unit", &self.unit_id)?,
            temperature: parse_float("temperature", &self.temperature)?,
            min_stock: parse_int("minimum stock", &self.min_stock)?,
            max_stock: parse_int("maximum stock", &self.max_stock)?,
            reorder_point: parse_int("reorder point", &self.reorder_point)?,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceForm {
    pub name: String,
    pub description: String,
}

impl ServiceForm {
    pub fn to_payload(&self) -> ServicePayload {
        ServicePayload {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
        }
    }
}

fn parse_int(field: &'static str, raw: &str) -> std::result::Result<Option<i64>, FormIssue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<i64>()
        .map(Some)
        .map_err(|_| FormIssue::NotANumber { field })
}

fn parse_float(field: &'static str, raw: &str) -> std::result::Result<Option<f64>, FormIssue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormIssue::NotANumber { field }),
    }
}

pub fn validate_product(p: &ProductPayload) -> ValidationVerdict {
    use ValidationVerdict::Invalid;

    if p.name.is_empty() || p.description.is_empty() {
        return Invalid(FormIssue::MissingNameOrDescription);
    }
    if matches!(p.unit_id, None | Some(0)) {
        return Invalid(FormIssue::MissingUnit);
    }
    if p.barcode.is_empty() {
        return Invalid(FormIssue::MissingBarcode);
    }
    if !validate_ean13(&p.barcode) {
        return Invalid(FormIssue::InvalidBarcode);
    }

    // 未填的欄位視為 -1
    let min = p.min_stock.unwrap_or(-1);
    let max = p.max_stock.unwrap_or(-1);
    let reorder = p.reorder_point.unwrap_or(-1);

    if min < 0 || max < 0 || reorder < 0 {
        return Invalid(FormIssue::NegativeStock);
    }
    if max <= min {
        return Invalid(FormIssue::MaxNotAboveMin);
    }
    if !(reorder > min && reorder <= max) {
        return Invalid(FormIssue::ReorderOutOfRange);
    }

    ValidationVerdict::Valid
}

/// 長度以 UTF-16 單位計算，與伺服器的限制一致
pub fn validate_service(s: &ServicePayload) -> ValidationVerdict {
    if s.name.is_empty() || s.description.is_empty() {
        return ValidationVerdict::Invalid(FormIssue::MissingNameOrDescription);
    }
    if s.name.encode_utf16().count() > SERVICE_NAME_MAX {
        return ValidationVerdict::Invalid(FormIssue::TooLong {
            field: "name",
            max: SERVICE_NAME_MAX,
        });
    }
    if s.description.encode_utf16().count() > SERVICE_DESCRIPTION_MAX {
        return ValidationVerdict::Invalid(FormIssue::TooLong {
            field: "description",
            max: SERVICE_DESCRIPTION_MAX,
        });
    }
    ValidationVerdict::Valid
}
