use crate::core::alphabet::DIGITS;
use crate::domain::model::{Base, Conversion, ConversionStep};

/// Converts `decimal` to a digit string in `to` by repeated division.
///
/// Zero short-circuits to a single step. Otherwise the trace has the stage banner,
/// one `n ÷ b = q remainder r(s)` line per division in the order computed, and the
/// final reading of the remainders.
pub fn convert_from_decimal(decimal: u64, to: Base) -> Conversion<String> {
    let banner = format!("Converting decimal {} to base {}", decimal, to.get());

    if decimal == 0 {
        return Conversion {
            value: "0".to_string(),
            steps: vec![ConversionStep::new(banner).with_result("0")],
        };
    }

    let radix = u64::from(to.get());
    let mut quotient = decimal;
    let mut digits = Vec::new();
    let mut divisions = Vec::new();

    while quotient > 0 {
        let dividend = quotient;
        let remainder = dividend % radix;
        quotient = dividend / radix;

        // remainder < radix <= 36
        let symbol = DIGITS[remainder as usize];
        divisions.push(format!(
            "{} ÷ {} = {} remainder {}({})",
            dividend, radix, quotient, remainder, symbol as char
        ));
        digits.push(symbol);
    }

    digits.reverse();
    let value: String = digits.into_iter().map(char::from).collect();

    tracing::debug!(decimal, base = to.get(), output = %value, "converted from decimal");

    let steps = vec![
        ConversionStep::new(banner),
        ConversionStep::new("Divide by base repeatedly, collecting remainders")
            .with_calculation(divisions.join("\n")),
        ConversionStep::new("Read remainders from bottom to top").with_result(value.clone()),
    ];

    Conversion { value, steps }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_bases() {
        assert_eq!(convert_from_decimal(10, Base::BINARY).value, "1010");
        assert_eq!(convert_from_decimal(15, Base::OCTAL).value, "17");
        assert_eq!(convert_from_decimal(255, Base::HEXADECIMAL).value, "FF");
        assert_eq!(convert_from_decimal(35, Base::new(36).unwrap()).value, "Z");
    }

    #[test]
    fn test_zero_emits_single_step() {
        let result = convert_from_decimal(0, Base::BINARY);
        assert_eq!(result.value, "0");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].description, "Converting decimal 0 to base 2");
        assert_eq!(result.steps[0].calculation, None);
        assert_eq!(result.steps[0].result.as_deref(), Some("0"));
    }

    #[test]
    fn test_division_trace() {
        let result = convert_from_decimal(26, Base::HEXADECIMAL);
        assert_eq!(result.steps.len(), 3);
        assert_eq!(result.steps[0].description, "Converting decimal 26 to base 16");
        assert_eq!(
            result.steps[1].calculation.as_deref(),
            Some("26 ÷ 16 = 1 remainder 10(A)\n1 ÷ 16 = 0 remainder 1(1)")
        );
        assert_eq!(result.steps[2].description, "Read remainders from bottom to top");
        assert_eq!(result.steps[2].result.as_deref(), Some("1A"));
    }

    #[test]
    fn test_largest_value() {
        let result = convert_from_decimal(u64::MAX, Base::HEXADECIMAL);
        assert_eq!(result.value, "FFFFFFFFFFFFFFFF");
        let binary = convert_from_decimal(u64::MAX, Base::BINARY);
        assert_eq!(binary.value, "1".repeat(64));
    }
}
