//! Number formatting and rounding shared by results, errors and reports.

use crate::constants::ROUNDING_DECIMALS;

/// Round `value` to `decimals` places, ties away from zero.
///
/// Scales by `10^decimals` and applies [`f64::round`]. For the non-negative
/// averages and percentages this crate produces that is round-half-up:
/// `0.125 -> 0.13`, `0.375 -> 0.38`. Ties are judged on the binary value, so
/// a literal such as `1.005` (stored as `1.00499...`) rounds down.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Round to the crate-wide two decimal places.
pub fn round2(value: f64) -> f64 {
    round_to(value, ROUNDING_DECIMALS)
}

/// Insert `,` between groups of three digits: `2000000 -> "2,000,000"`.
pub fn group_thousands<T: std::fmt::Display>(value: T) -> String {
    let raw = value.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };

    let mut out = String::with_capacity(raw.len() + digits.len() / 3);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
