//! Short decimal formatting for persisted scores and times.
//!
//! Scores, yardages and times are stored in the record format as strings.
//! They are rendered in fixed-point with trailing zeros trimmed so that a
//! score of `3.0` persists as `"3"` rather than `"3.000000"`.

/// Format a value in fixed-point with the given precision.
///
/// Trailing zeros are trimmed unless `prec` is 2. Then they are only
/// trimmed if the entire fraction is zero, so times keep their
/// conventional two decimal places (`"31.25"`, `"31.50"`) but whole
/// seconds render bare (`"31"`).
///
/// A precision of 0 formats with six digits before trimming.
pub fn format(value: f64, prec: usize) -> String {
    let digits = if prec > 0 { prec } else { 6 };
    let mut formatted = format!("{:.*}", digits, value);
    let Some(pos) = formatted.find('.') else {
        return formatted;
    };
    if prec == 2 {
        // Strip the fraction iff it is ".00".
        if &formatted[pos..] == ".00" {
            formatted.truncate(pos);
            if formatted.is_empty() || formatted == "-" {
                formatted = "0".to_string();
            }
        }
    } else {
        let mut len = formatted.len();
        while len > 0 && formatted.as_bytes()[len - 1] == b'0' {
            len -= 1;
        }
        if len > 0 && formatted.as_bytes()[len - 1] == b'.' {
            len -= 1;
        }
        formatted.truncate(len);
    }
    formatted
}

/// Compare two values for equality within a magnitude-scaled epsilon.
///
/// Values whose binary exponents differ are never equal; otherwise the
/// difference must fall within `epsilon` scaled to the shared exponent.
pub fn nearly_equal(v1: f64, v2: f64, epsilon: f64) -> bool {
    if v1 == v2 {
        return true;
    }
    let mag1 = binary_exponent(v1);
    let mag2 = binary_exponent(v2);
    if mag1 != mag2 {
        return false;
    }
    let scaled = epsilon * 2f64.powi(mag1);
    (v1 - v2).abs() <= scaled
}

/// The exponent `e` such that `|v| = m * 2^e` with `m` in `[0.5, 1)`.
fn binary_exponent(v: f64) -> i32 {
    if v == 0.0 {
        0
    } else {
        v.abs().log2().floor() as i32 + 1
    }
}
