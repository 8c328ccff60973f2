//! Height text parsing and display.
//!
//! The stats API reports heights as `"<feet>-<inches>"` strings (`"6-9"`).
//! Everything internal works in whole inches.

/// Parse `"6-7"` into inches (`79`).
///
/// Returns `None` for missing, empty or malformed text instead of failing;
/// callers skip those records. The inches part must be below 12.
pub fn parse_height(text: Option<&str>) -> Option<u16> {
    let text = text?.trim();
    let (feet, inches) = text.split_once('-')?;
    let feet: u16 = feet.trim().parse().ok()?;
    let inches: u16 = inches.trim().parse().ok()?;
    if inches >= 12 {
        return None;
    }
    feet.checked_mul(12)?.checked_add(inches)
}

/// Render inches as `6'7"`, rounding to the nearest inch. Missing or NaN is `"NA"`.
pub fn format_height(inches: Option<f64>) -> String {
    match inches {
        Some(x) if x.is_finite() && x >= 0.0 => {
            let total = x.round() as u64;
            format!("{}'{}\"", total / 12, total % 12)
        }
        _ => "NA".to_string(),
    }
}
