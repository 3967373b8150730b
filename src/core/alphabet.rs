/// Digit symbols in value order: `DIGITS[i]` has numeric value `i`.
pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Numeric value of a symbol, case-insensitive.
pub fn digit_value(symbol: char) -> Option<u32> {
    symbol.to_digit(36)
}

/// Symbol for a digit value, if it is below 36.
pub fn symbol_for(value: u32) -> Option<char> {
    DIGITS.get(value as usize).map(|b| *b as char)
}

/// The usable prefix of the alphabet for `base`, clamped to the full alphabet.
pub fn valid_symbols(base: u32) -> &'static [u8] {
    let len = (base as usize).min(DIGITS.len());
    &DIGITS[..len]
}

/// Upper-cases and trims surrounding whitespace.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}
