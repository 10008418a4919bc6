//! Threshold resolution.

use crate::{
    error::Result,
    params::{parse_field, THRESHOLD},
};

/// Returns true if `value` is a usable percentage, i.e. in (0, 100].
pub fn is_valid_threshold(value: f64) -> bool {
    value > 0.0 && value <= 100.0
}

/// Resolves the threshold for one invocation.
///
/// Absent or out-of-range values fall back to `default`. Text that is not a
/// number is an input error.
///
/// # Examples
///
/// ```rust
/// use diskbalancer_core::command::resolve_threshold;
///
/// assert_eq!(resolve_threshold(Some("25"), 10.0).unwrap(), 25.0);
/// assert_eq!(resolve_threshold(Some("150"), 10.0).unwrap(), 10.0);
/// assert_eq!(resolve_threshold(None, 10.0).unwrap(), 10.0);
/// assert!(resolve_threshold(Some("lots"), 10.0).is_err());
/// ```
pub fn resolve_threshold(raw: Option<&str>, default: f64) -> Result<f64> {
    match parse_field::<f64>(THRESHOLD, raw)? {
        Some(value) if is_valid_threshold(value) => Ok(value),
        _ => Ok(default),
    }
}
