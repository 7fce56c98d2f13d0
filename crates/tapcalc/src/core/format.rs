//! Result rounding and rendering

/// Maximum number of fractional digits kept in a result
pub const ROUNDING_PLACES: i32 = 6;

/// Rounds to at most [`ROUNDING_PLACES`] fractional digits, half away from zero
///
/// Values whose scaled form is no longer finite already carry fewer
/// fractional digits than the limit and are returned unchanged.
#[must_use]
pub fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(ROUNDING_PLACES);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Renders a number in minimal form: no trailing zeros, no trailing point
///
/// Non-finite values render as `Infinity`, `-Infinity` and `NaN`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // -0 renders as 0
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
