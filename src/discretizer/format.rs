//! Number formatting for human-readable bin descriptions.

/// Tolerance under which a scaled value counts as already lying on a two-decimal grid point.
const GRID_TOLERANCE: f64 = 1e-9;

/// Round up to at most two decimals and print without trailing zeros.
///
/// `3.14159 -> "3.15"`, `2.0 -> "2"`, `-1.234 -> "-1.23"`.
pub fn round_to_two(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let scaled = value * 100.0;
    let nearest = scaled.round();
    let rounded = if (scaled - nearest).abs() < GRID_TOLERANCE {
        nearest
    } else {
        scaled.ceil()
    };

    let text = format!("{:.2}", rounded / 100.0);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}
