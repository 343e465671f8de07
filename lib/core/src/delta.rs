//! Human-readable deltas against the target's value
//!
//! Signed percentage of the target's value to one decimal place, e.g.
//! `+12.3%`. Percentage-like metrics with a ~zero target fall back to
//! percentage points (`+4.0pp`); a ~zero magnitude target and missing values
//! render as the empty string.

use crate::normalize::EPSILON;

/// Format the difference between a candidate's value and the target's.
///
/// `percentage_like` selects the percentage-point fallback when the target
/// is ~zero; magnitude metrics render `""` there instead, since a percentage
/// of zero throughput is meaningless.
pub fn delta_display(value: Option<f64>, target: Option<f64>, percentage_like: bool) -> String {
    let (value, target) = match (value, target) {
        (Some(v), Some(t)) if v.is_finite() && t.is_finite() => (v, t),
        _ => return String::new(),
    };
    let diff = value - target;
    if target.abs() < EPSILON {
        if percentage_like {
            return format!("{diff:+.1}pp");
        }
        return String::new();
    }
    format!("{:+.1}%", diff / target * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of_target() {
        assert_eq!(delta_display(Some(1123.0), Some(1000.0), false), "+12.3%");
        assert_eq!(delta_display(Some(877.0), Some(1000.0), false), "-12.3%");
        assert_eq!(delta_display(Some(5.5), Some(5.0), true), "+10.0%");
    }

    #[test]
    fn test_zero_target_percentage_points() {
        assert_eq!(delta_display(Some(4.0), Some(0.0), true), "+4.0pp");
        assert_eq!(delta_display(Some(-2.5), Some(0.0), true), "-2.5pp");
    }

    #[test]
    fn test_zero_magnitude_target_is_empty() {
        assert_eq!(delta_display(Some(4.0), Some(0.0), false), "");
    }

    #[test]
    fn test_missing_values_are_empty() {
        assert_eq!(delta_display(None, Some(1.0), true), "");
        assert_eq!(delta_display(Some(1.0), None, true), "");
        assert_eq!(delta_display(Some(f64::NAN), Some(1.0), true), "");
    }

    #[test]
    fn test_sign_on_zero_diff() {
        assert_eq!(delta_display(Some(1000.0), Some(1000.0), false), "+0.0%");
    }
}
