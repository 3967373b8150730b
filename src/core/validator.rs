use crate::core::alphabet::{digit_value, normalize};

/// True when `input` is non-blank and every character, ignoring case, lies in the
/// first `base` symbols of the alphabet. Does not range-check `base`.
pub fn is_valid_number(input: &str, base: u32) -> bool {
    let normalized = normalize(input);
    if normalized.is_empty() {
        return false;
    }

    normalized
        .chars()
        .all(|c| matches!(digit_value(c), Some(value) if value < base))
}
