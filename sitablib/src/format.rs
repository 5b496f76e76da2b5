//! Value(uncertainty) token formatting.
//!
//! A measurement is rendered in the compact notation siunitx understands:
//! `2.200(020)` means 2.200 ± 0.020, the parenthesized digits counting units
//! of the last displayed digit of the nominal value. Every token is wrapped
//! in `\num{...}` so the `S` column type can align it.

use crate::measurement::Measurement;

/// Opening of the numeric-literal macro around every cell.
pub const NUM_OPEN: &str = "\\num{";
/// Closing of the numeric-literal macro.
pub const NUM_CLOSE: &str = "}";

/// Render `value` with exactly `precision` digits after the decimal point.
pub fn fixed(value: f64, precision: usize) -> String {
    format!("{:.*}", precision, value)
}

/// Digits of the uncertainty, in units of the last displayed digit.
///
/// The uncertainty is rendered at `precision` decimals and the decimal point
/// dropped. A bare zero integer part carries no information in this notation
/// and is left out, so `0.020` becomes `020` while `1.5` stays `15`.
///
/// ```rust
/// use sitablib::format::uncertainty_digits;
///
/// assert_eq!(uncertainty_digits(0.02023, 3), "020");
/// assert_eq!(uncertainty_digits(1.5, 1), "15");
/// assert_eq!(uncertainty_digits(5.0, 0), "5");
/// ```
pub fn uncertainty_digits(uncertainty: f64, precision: usize) -> String {
    let rendered = fixed(uncertainty, precision);
    match rendered.split_once('.') {
        Some(("0", frac)) => frac.to_string(),
        Some((int, frac)) => format!("{}{}", int, frac),
        None => rendered,
    }
}

/// Format one measurement as a `\num{...}` token.
///
/// ```rust
/// use sitablib::{format_measurement, Measurement};
///
/// let m = Measurement::new(2.2, 0.02023).unwrap();
/// assert_eq!(format_measurement(&m, 3), "\\num{2.200(020)}");
///
/// let exact = Measurement::exact(5.0).unwrap();
/// assert_eq!(format_measurement(&exact, 0), "\\num{5}");
/// ```
pub fn format_measurement(measurement: &Measurement, precision: usize) -> String {
    let nominal = fixed(measurement.nominal(), precision);
    if measurement.has_uncertainty() {
        format!(
            "{}{}({}){}",
            NUM_OPEN,
            nominal,
            uncertainty_digits(measurement.uncertainty(), precision),
            NUM_CLOSE
        )
    } else {
        format!("{}{}{}", NUM_OPEN, nominal, NUM_CLOSE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn m(nominal: f64, uncertainty: f64) -> Measurement {
        Measurement::new(nominal, uncertainty).unwrap()
    }

    #[test]
    fn test_fixed_rounds() {
        assert_eq!(fixed(2.2, 3), "2.200");
        assert_eq!(fixed(5.59, 1), "5.6");
        assert_eq!(fixed(0.19782, 3), "0.198");
        assert_eq!(fixed(4.0, 0), "4");
    }

    #[test]
    fn test_uncertainty_digits() {
        assert_eq!(uncertainty_digits(0.19782, 3), "198");
        assert_eq!(uncertainty_digits(0.0030, 3), "003");
        assert_eq!(uncertainty_digits(0.40897, 3), "409");
        assert_eq!(uncertainty_digits(12.34, 1), "123");
        assert_eq!(uncertainty_digits(0.3, 0), "0");
    }

    #[test]
    fn test_tiny_uncertainty_keeps_zero_digits() {
        // Rounds to nothing at this precision but is still reported.
        assert_eq!(format_measurement(&m(1.0, 0.0001), 2), "\\num{1.00(00)}");
    }

    #[test]
    fn test_spec_examples() {
        assert_eq!(format_measurement(&m(2.2, 0.02023), 3), "\\num{2.200(020)}");
        assert_eq!(format_measurement(&m(5.0, 0.0), 0), "\\num{5}");
        assert_eq!(format_measurement(&m(5.0, 5.0), 0), "\\num{5(5)}");
    }

    #[test]
    fn test_negative_nominal() {
        assert_eq!(format_measurement(&m(-1.25, 0.5), 2), "\\num{-1.25(50)}");
    }

    proptest! {
        #[test]
        fn prop_exact_values_have_no_suffix(
            nominal in -1.0e6f64..1.0e6,
            precision in 0usize..8,
        ) {
            let token = format_measurement(&m(nominal, 0.0), precision);
            prop_assert!(!token.contains('('));
            prop_assert!(!token.contains(')'));
            prop_assert!(token.starts_with(NUM_OPEN));
            prop_assert!(token.ends_with(NUM_CLOSE));
        }

        #[test]
        fn prop_suffix_is_rounded_uncertainty(
            nominal in -1.0e3f64..1.0e3,
            uncertainty in 1.0e-9f64..1.0e3,
            precision in 0usize..6,
        ) {
            let token = format_measurement(&m(nominal, uncertainty), precision);
            let open = token.find('(').unwrap();
            let close = token.rfind(')').unwrap();
            let digits = &token[open + 1..close];

            prop_assert!(!digits.is_empty());
            prop_assert!(!digits.contains('.'));
            prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));

            let units: f64 = digits.parse().unwrap();
            let expected: f64 = fixed(uncertainty, precision).parse().unwrap();
            let scale = 10f64.powi(precision as i32);
            prop_assert!((units / scale - expected).abs() <= 1e-9 * expected.max(1.0));
        }
    }
}
