//! Administrative code formats (JIS X 0401 / 0402 without check digit).

/// Length of a prefecture code, e.g. `13`.
pub const PREFECTURE_CODE_LEN: usize = 2;
/// Length of a local government code, e.g. `13101`.
pub const CITY_CODE_LEN: usize = 5;

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_prefecture_code(value: &str) -> bool {
    is_digits(value, PREFECTURE_CODE_LEN)
}

pub fn is_city_code(value: &str) -> bool {
    is_digits(value, CITY_CODE_LEN)
}
