use crate::core::alphabet::{digit_value, normalize};
use crate::domain::model::{Base, Conversion, ConversionStep};
use crate::utils::error::{ConvertError, Result};

struct Contribution {
    symbol: char,
    digit: u32,
    weight: usize,
    value: u64,
}

impl Contribution {
    fn line(&self, base: Base) -> String {
        format!(
            "{}({}) × {}^{} = {}",
            self.symbol,
            self.digit,
            base.get(),
            self.weight,
            self.value
        )
    }
}

/// Converts a digit string in `from` to its value by summing positional contributions.
///
/// The trace has three steps: the stage banner, one `d(v) × b^w = c` line per
/// character, and the sum of the contributions.
pub fn convert_to_decimal(input: &str, from: Base) -> Result<Conversion<u64>> {
    let normalized = normalize(input);
    let overflow = || ConvertError::Overflow {
        input: normalized.clone(),
        base: from.get(),
    };

    let symbols: Vec<char> = normalized.chars().collect();
    if symbols.is_empty() {
        return Err(ConvertError::InvalidInput {
            input: input.to_string(),
            base: from.get(),
        });
    }

    let radix = u64::from(from.get());
    let mut contributions = Vec::with_capacity(symbols.len());
    let mut total: u64 = 0;

    for (i, &symbol) in symbols.iter().enumerate() {
        let digit = digit_value(symbol)
            .filter(|d| *d < from.get())
            .ok_or_else(|| ConvertError::InvalidInput {
                input: input.to_string(),
                base: from.get(),
            })?;
        let weight = symbols.len() - 1 - i;

        // A zero digit contributes nothing no matter how large its place value is.
        let value = if digit == 0 {
            0
        } else {
            let exponent = u32::try_from(weight).map_err(|_| overflow())?;
            radix
                .checked_pow(exponent)
                .and_then(|place| place.checked_mul(u64::from(digit)))
                .ok_or_else(overflow)?
        };

        total = total.checked_add(value).ok_or_else(overflow)?;
        contributions.push(Contribution {
            symbol,
            digit,
            weight,
            value,
        });
    }

    tracing::debug!(
        input = %normalized,
        base = from.get(),
        value = total,
        "converted to decimal"
    );

    let lines: Vec<String> = contributions.iter().map(|c| c.line(from)).collect();
    let sum = contributions
        .iter()
        .map(|c| c.value.to_string())
        .collect::<Vec<_>>()
        .join(" + ");

    let steps = vec![
        ConversionStep::new(format!(
            "Converting from base {} to decimal (base 10)",
            from.get()
        )),
        ConversionStep::new("Multiply each digit by base raised to its position")
            .with_calculation(lines.join("\n")),
        ConversionStep::new("Sum all position values")
            .with_calculation(sum)
            .with_result(total.to_string()),
    ];

    Ok(Conversion {
        value: total,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(n: u32) -> Base {
        Base::new(n).unwrap()
    }

    #[test]
    fn test_binary_to_decimal() {
        let result = convert_to_decimal("1010", Base::BINARY).unwrap();
        assert_eq!(result.value, 10);
        assert_eq!(result.steps.len(), 3);
    }

    #[test]
    fn test_common_bases() {
        assert_eq!(convert_to_decimal("17", Base::OCTAL).unwrap().value, 15);
        assert_eq!(convert_to_decimal("FF", Base::HEXADECIMAL).unwrap().value, 255);
        assert_eq!(convert_to_decimal("0", Base::DECIMAL).unwrap().value, 0);
        assert_eq!(convert_to_decimal("Z", base(36)).unwrap().value, 35);
    }

    #[test]
    fn test_trace_text() {
        let result = convert_to_decimal("1a", Base::HEXADECIMAL).unwrap();
        let steps = &result.steps;

        assert_eq!(
            steps[0].description,
            "Converting from base 16 to decimal (base 10)"
        );
        assert_eq!(steps[0].calculation, None);
        assert_eq!(steps[0].result, None);

        assert_eq!(
            steps[1].calculation.as_deref(),
            Some("1(1) × 16^1 = 16\nA(10) × 16^0 = 10")
        );
        assert_eq!(steps[1].result, None);

        assert_eq!(steps[2].description, "Sum all position values");
        assert_eq!(steps[2].calculation.as_deref(), Some("16 + 10"));
        assert_eq!(steps[2].result.as_deref(), Some("26"));
    }

    #[test]
    fn test_leading_zeros_contribute_nothing() {
        let result = convert_to_decimal("0010", Base::BINARY).unwrap();
        assert_eq!(result.value, 2);
        assert_eq!(result.steps[2].calculation.as_deref(), Some("0 + 0 + 2 + 0"));
    }

    #[test]
    fn test_long_run_of_leading_zeros() {
        let input = format!("{}1", "0".repeat(200));
        let result = convert_to_decimal(&input, base(36)).unwrap();
        assert_eq!(result.value, 1);
    }

    #[test]
    fn test_u64_boundary() {
        let max = "FFFFFFFFFFFFFFFF";
        assert_eq!(
            convert_to_decimal(max, Base::HEXADECIMAL).unwrap().value,
            u64::MAX
        );

        let too_big = "10000000000000000";
        assert!(matches!(
            convert_to_decimal(too_big, Base::HEXADECIMAL),
            Err(ConvertError::Overflow { base: 16, .. })
        ));
    }

    #[test]
    fn test_rejects_symbols_outside_base() {
        assert!(matches!(
            convert_to_decimal("102", Base::BINARY),
            Err(ConvertError::InvalidInput { base: 2, .. })
        ));
        assert!(convert_to_decimal("", Base::BINARY).is_err());
    }
}
