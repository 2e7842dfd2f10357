//! EAN-13 check digit.
//!
//! Weight 1 on odd positions (indices 0, 2, .., 10), weight 3 on even
//! positions (indices 1, 3, .., 11), then the modulo-10 complement.

pub const EAN13_LEN: usize = 13;

/// 由 12 位數字計算檢查碼，格式不符時回傳 `None`
pub fn ean13_check_digit(payload: &str) -> Option<u8> {
    let bytes = payload.as_bytes();
    if bytes.len() != EAN13_LEN - 1 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut odd_sum = 0u32;
    let mut even_sum = 0u32;
    for (i, b) in bytes.iter().enumerate() {
        let digit = u32::from(b - b'0');
        if i % 2 == 0 {
            odd_sum += digit;
        } else {
            even_sum += digit;
        }
    }

    let total = odd_sum + even_sum * 3;
    Some(((10 - total % 10) % 10) as u8)
}

/// 驗證 13 位 EAN 條碼；長度或字元不符直接回傳 false
pub fn validate_ean13(code: &str) -> bool {
    if code.len() != EAN13_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let (payload, declared) = code.split_at(EAN13_LEN - 1);
    let declared = declared.as_bytes()[0] - b'0';
    ean13_check_digit(payload) == Some(declared)
}
