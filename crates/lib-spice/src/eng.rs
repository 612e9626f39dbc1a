//! Engineering number formatting.
//!
//! Component values and report figures are printed with at most six
//! significant digits, C `printf` `%g` style: trailing zeros dropped,
//! scientific notation once the exponent leaves the [-4, precision) window.

/// Format `value` with at most `digits` significant digits, `%g` style.
pub fn sig(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round first in exponential form; the rounded exponent decides the
    // representation (999999.5 at six digits is 1e+06, not 1000000).
    let rounded = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = rounded
        .split_once('e')
        .expect("exponential format always contains 'e'");
    let exponent: i32 = exponent.parse().expect("exponent is an integer");

    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        let fixed = format!("{:.*}", decimals, value);
        if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        } else {
            fixed
        }
    }
}

/// Six significant digits, the precision used throughout the output surface.
pub fn sig6(value: f64) -> String {
    sig(value, 6)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_values() {
        assert_eq!(sig6(0.0), "0");
        assert_eq!(sig6(7.0), "7");
        assert_eq!(sig6(-50.0), "-50");
        assert_eq!(sig6(2.3333333333), "2.33333");
    }

    #[test]
    fn test_six_significant_digits() {
        assert_eq!(sig6(454.72840883), "454.728");
        assert_eq!(sig6(909.4568177), "909.457");
        assert_eq!(sig6(1136.821022), "1136.82");
        assert_eq!(sig6(4889.381836), "4889.38");
    }

    #[test]
    fn test_scientific_switchover() {
        assert_eq!(sig6(1234567.0), "1.23457e+06");
        assert_eq!(sig6(1e7), "1e+07");
        assert_eq!(sig6(0.0001234567), "0.000123457");
        assert_eq!(sig6(1.234567e-5), "1.23457e-05");
    }

    #[test]
    fn test_rounding_can_promote_exponent() {
        assert_eq!(sig6(999999.5), "1e+06");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(sig6(f64::INFINITY), "inf");
        assert_eq!(sig6(f64::NAN), "NaN");
    }
}
