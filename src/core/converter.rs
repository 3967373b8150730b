use crate::core::alphabet::normalize;
use crate::core::clock::now_millis;
use crate::core::from_decimal::convert_from_decimal;
use crate::core::to_decimal::convert_to_decimal;
use crate::core::validator::is_valid_number;
use crate::domain::model::{Base, ConversionResult, ConversionStep};
use crate::utils::error::{ConvertError, Result};

/// Converts `input` from base `from` to base `to`, recording every arithmetic step.
///
/// Both bases are range-checked before the input is validated, so an unsupported
/// base is always reported as [`ConvertError::InvalidBase`].
pub fn convert(input: &str, from: u32, to: u32) -> Result<ConversionResult> {
    let from_base = Base::new(from)?;
    let to_base = Base::new(to)?;

    if !is_valid_number(input, from) {
        tracing::warn!(input, base = from, "rejected input");
        return Err(ConvertError::InvalidInput {
            input: input.to_string(),
            base: from,
        });
    }

    convert_between(input, from_base, to_base)
}

/// Same as [`convert`] for callers that already hold validated bases.
pub fn convert_between(input: &str, from: Base, to: Base) -> Result<ConversionResult> {
    let normalized = normalize(input);
    tracing::debug!(input = %normalized, from = from.get(), to = to.get(), "starting conversion");

    let mut steps = Vec::new();

    let output = if from == to {
        if !is_valid_number(&normalized, from.get()) {
            return Err(ConvertError::InvalidInput {
                input: input.to_string(),
                base: from.get(),
            });
        }
        steps.push(
            ConversionStep::new("Input and output bases are the same")
                .with_result(normalized.clone()),
        );
        normalized.clone()
    } else {
        let decimal = convert_to_decimal(&normalized, from)?;
        steps.extend(decimal.steps);

        if to == Base::DECIMAL {
            decimal.value.to_string()
        } else {
            let digits = convert_from_decimal(decimal.value, to);
            steps.extend(digits.steps);
            digits.value
        }
    };

    Ok(ConversionResult {
        input: normalized,
        output,
        from_base: from,
        to_base: to,
        steps,
        timestamp: now_millis(),
    })
}

/// Converts a result's output back to its source base, i.e. the same request with the bases swapped.
pub fn convert_back(result: &ConversionResult) -> Result<ConversionResult> {
    convert_between(&result.output, result.to_base, result.from_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_base_is_identity() {
        let result = convert(" 0Ab ", 16, 16).unwrap();
        assert_eq!(result.input, "0AB");
        assert_eq!(result.output, "0AB");
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.steps[0].description, "Input and output bases are the same");
        assert_eq!(result.steps[0].result.as_deref(), Some("0AB"));
    }

    #[test]
    fn test_decimal_target_skips_division() {
        let result = convert("1111", 2, 10).unwrap();
        assert_eq!(result.output, "15");
        assert_eq!(result.steps.len(), 3);
        assert!(result
            .steps
            .iter()
            .all(|s| !s.description.starts_with("Divide by base")));
    }

    #[test]
    fn test_full_pipeline_concatenates_traces() {
        let result = convert("17", 8, 16).unwrap();
        assert_eq!(result.output, "F");
        assert_eq!(result.steps.len(), 6);
        assert_eq!(
            result.steps[0].description,
            "Converting from base 8 to decimal (base 10)"
        );
        assert_eq!(result.steps[3].description, "Converting decimal 15 to base 16");
        assert_eq!(result.steps[5].result.as_deref(), Some("F"));
    }

    #[test]
    fn test_zero_to_non_decimal_base() {
        let result = convert("000", 16, 8).unwrap();
        assert_eq!(result.output, "0");
        // three encoder steps plus the single zero step
        assert_eq!(result.steps.len(), 4);
    }

    #[test]
    fn test_base_checked_before_input() {
        assert!(matches!(
            convert("10", 1, 10),
            Err(ConvertError::InvalidBase { base: 1 })
        ));
        assert!(matches!(
            convert("10", 10, 37),
            Err(ConvertError::InvalidBase { base: 37 })
        ));
        assert!(matches!(
            convert("102", 2, 10),
            Err(ConvertError::InvalidInput { base: 2, .. })
        ));
    }

    #[test]
    fn test_convert_between_revalidates_same_base_input() {
        assert!(convert_between("XYZ", Base::DECIMAL, Base::DECIMAL).is_err());
    }

    #[test]
    fn test_convert_back() {
        let forward = convert("0010", 2, 16).unwrap();
        assert_eq!(forward.output, "2");
        let back = convert_back(&forward).unwrap();
        assert_eq!(back.from_base, Base::HEXADECIMAL);
        assert_eq!(back.to_base, Base::BINARY);
        assert_eq!(back.output, "10");
        assert!(back.timestamp >= forward.timestamp);
    }
}
