/// Returns true when `value` is exactly `length` ASCII digits.
pub fn is_card_number(value: &str, length: usize) -> bool {
    value.len() == length && value.bytes().all(|byte| byte.is_ascii_digit())
}
