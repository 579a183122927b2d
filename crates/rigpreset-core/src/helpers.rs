//! Coercion and formatting helpers shared by the preset records.
//!
//! The section store holds everything as strings, including fields the
//! user may have hand-edited in the file. These helpers centralize the
//! "never fail, coerce to zero" policy applied to every numeric field.

use tracing::warn;

/// Parse a stored integer field, coercing any failure to 0.
///
/// Logs a diagnostic on failure; never fails.
///
/// # Example
///
/// ```
/// use rigpreset_core::to_int;
///
/// assert_eq!(to_int("1318"), 1318);
/// assert_eq!(to_int("-7"), -7);
/// assert_eq!(to_int(""), 0);
/// assert_eq!(to_int("abc"), 0);
/// ```
pub fn to_int(val: &str) -> i32 {
    match val.trim().parse::<i32>() {
        Ok(n) => n,
        Err(_) => {
            if !val.is_empty() {
                warn!(value = val, "invalid integer value, using 0");
            }
            0
        }
    }
}

/// Parse a stored floating-point field, coercing any failure to 0.0.
///
/// Logs a diagnostic on failure; never fails.
///
/// # Example
///
/// ```
/// use rigpreset_core::to_float;
///
/// assert_eq!(to_float("146.640"), 146.640);
/// assert_eq!(to_float(""), 0.0);
/// assert_eq!(to_float("7.074.000"), 0.0);
/// ```
pub fn to_float(val: &str) -> f64 {
    match val.trim().parse::<f64>() {
        Ok(n) => n,
        Err(_) => {
            if !val.is_empty() {
                warn!(value = val, "invalid float value, using 0.0");
            }
            0.0
        }
    }
}

/// Format a frequency in MHz with the standard six decimal places.
///
/// This is both the display form and the storage form of preset
/// frequencies, so a persist/hydrate cycle is exact for values the user
/// can actually enter.
///
/// # Example
///
/// ```
/// use rigpreset_core::format_freq_mhz;
///
/// assert_eq!(format_freq_mhz(146.640), "146.640000");
/// assert_eq!(format_freq_mhz(0.0), "0.000000");
/// ```
pub fn format_freq_mhz(freq_mhz: f64) -> String {
    format!("{freq_mhz:.6}")
}
