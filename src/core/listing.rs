use crate::core::classify::is_service;
use crate::domain::model::CatalogRecord;
use crate::utils::error::{CatalogError, Result};
use serde::Serialize;
use std::str::FromStr;

/// 清單上顯示的一列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub barcode: String,
    pub temperature: String,
    pub stock: String,
    pub unit: String,
    pub is_service: bool,
}

fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

impl CatalogRow {
    pub fn from_record(record: &CatalogRecord) -> Self {
        let service = is_service(record);

        Self {
            id: cell(&record.id),
            name: cell(&record.name),
            description: cell(&record.description),
            barcode: cell(&record.barcode),
            temperature: cell(&record.temperature),
            stock: format!(
                "{}/{}/{}",
                cell(&record.min_stock),
                cell(&record.max_stock),
                cell(&record.reorder_point)
            ),
            // 服務不顯示計量單位
            unit: if service { String::new() } else { cell(&record.unit) },
            is_service: service,
        }
    }
}

pub fn build_rows(records: &[CatalogRecord]) -> Vec<CatalogRow> {
    records.iter().map(CatalogRow::from_record).collect()
}

/// 依名稱過濾，不分大小寫
pub fn filter_rows<'a>(rows: &'a [CatalogRow], query: &str) -> Vec<&'a CatalogRow> {
    let query = query.to_lowercase();
    rows.iter()
        .filter(|row| row.name.to_lowercase().contains(&query))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub const NAMES: [&'static str; 3] = ["table", "json", "csv"];
}

impl FromStr for OutputFormat {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(CatalogError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: format!("Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

const HEADERS: [&str; 8] = [
    "id",
    "name",
    "description",
    "barcode",
    "temperature",
    "min/max/reorder",
    "unit",
    "kind",
];

fn fields(row: &CatalogRow) -> [&str; 8] {
    [
        row.id.as_str(),
        row.name.as_str(),
        row.description.as_str(),
        row.barcode.as_str(),
        row.temperature.as_str(),
        row.stock.as_str(),
        row.unit.as_str(),
        if row.is_service { "service" } else { "product" },
    ]
}

pub fn render(rows: &[&CatalogRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(rows)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => render_csv(rows),
    }
}

fn render_table(rows: &[&CatalogRow]) -> String {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in rows {
        for (width, field) in widths.iter_mut().zip(fields(row)) {
            *width = (*width).max(field.chars().count());
        }
    }

    let line = |values: [&str; 8]| {
        values
            .iter()
            .zip(widths.iter())
            .map(|(value, width)| format!("{:<width$}", value, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(HEADERS)];
    out.extend(rows.iter().map(|row| line(fields(row))));
    out.join("\n")
}

fn render_csv(rows: &[&CatalogRow]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record(fields(row))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| CatalogError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| CatalogError::ConfigError {
        message: format!("CSV output is not UTF-8: {}", e),
    })
}
