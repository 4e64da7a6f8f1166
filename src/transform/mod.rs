pub mod campaign;
pub mod client;
pub mod date;
pub mod economics;

/// `"1"` if `value` case-insensitively equals `truthy`, otherwise `"0"`.
/// Missing values take the `"0"` branch like any other non-match.
fn binary_flag(value: &str, truthy: &str) -> String {
    if value.eq_ignore_ascii_case(truthy) {
        "1".to_string()
    } else {
        "0".to_string()
    }
}
