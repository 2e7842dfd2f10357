use crate::domain::model::CatalogRecord;

/// Reserved barcode the API stores on service entries. Compared literally,
/// it does not pass the EAN-13 checksum.
pub const SERVICE_BARCODE: &str = "9999999999996";

/// (minimum, maximum, reorder point) the API assigns to services.
pub const SERVICE_STOCK_SIGNATURE: (i64, i64, i64) = (0, 1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Product,
    Service,
}

impl ItemKind {
    pub fn of(record: &CatalogRecord) -> Self {
        if is_service(record) {
            ItemKind::Service
        } else {
            ItemKind::Product
        }
    }
}

/// 判斷一列是否為服務：哨兵條碼，或庫存組合為 0/1/1
pub fn is_service(record: &CatalogRecord) -> bool {
    let by_barcode = record.barcode.as_deref().unwrap_or("") == SERVICE_BARCODE;

    let (min, max, reorder) = SERVICE_STOCK_SIGNATURE;
    let by_stock = record.min_stock == Some(min)
        && record.max_stock == Some(max)
        && record.reorder_point == Some(reorder);

    by_barcode || by_stock
}
