//! Fixed-decimal rounding of `f64` values
//!
//! Rounding works on the exact decimal expansion of the double, not on
//! `value * 10^n`. The multiply can turn `...4999` into an exact `...5`,
//! which then rounds the wrong way. Halves round away from zero.

/// Longest fractional expansion of a finite `f64` (smallest subnormal)
const EXACT_DIGITS: usize = 1074;

/// Format `value` with exactly `decimals` fractional digits.
///
/// Non-finite values print as `NaN`, `Infinity` and `-Infinity`.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(decimals))
        .collect();
    let round_up = frac_part.as_bytes().get(decimals).is_some_and(|&d| d >= b'5');

    if round_up {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let split = digits.len() - decimals;
    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    out.extend(digits[..split].iter().map(|&d| d as char));
    if decimals > 0 {
        out.push('.');
        out.extend(digits[split..].iter().map(|&d| d as char));
    }
    out
}

/// Round `value` to `decimals` fractional digits; non-finite values pass through
pub fn round_fixed(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    to_fixed(value, decimals).parse().unwrap_or(value)
}
