//! Pure conversion math: millimeters to inches and pixels, export scaling,
//! and the aspect-fit preview rectangle.
//!
//! Everything here is a deterministic function of its arguments; the state
//! handling lives in [`crate::state`].

/// 1 inch = 25.4 mm, exact by definition.
pub const MM_PER_INCH: f64 = 25.4;

/// Fallback resolution when the input is non-finite or non-positive.
pub const DEFAULT_DPI: f64 = 300.0;

/// Advisory input range for DPI. Enforced by the input field, not here;
/// the engine accepts any positive finite value.
pub const DPI_MIN: f64 = 30.0;
pub const DPI_MAX: f64 = 1200.0;

/// Practical input step for the export multiplier; no upper bound.
pub const MULTIPLIER_STEP: f64 = 0.1;

/// Preview box bounds in display units. The longer physical side always
/// maps to `PREVIEW_LONG_SIDE` (landscape/square) or the height maps to
/// `PREVIEW_SHORT_SIDE` (portrait).
pub const PREVIEW_LONG_SIDE: f64 = 240.0;
pub const PREVIEW_SHORT_SIDE: f64 = 180.0;

pub fn inch_from_mm(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

/// Pixel dimensions at the given resolution.
///
/// Each axis is rounded independently with `f64::round` (half away from
/// zero; all real inputs are positive so this is round-half-up).
pub fn compute_pixels(width_mm: f64, height_mm: f64, dpi: f64) -> (u32, u32) {
    let width_px = (inch_from_mm(width_mm) * dpi).round();
    let height_px = (inch_from_mm(height_mm) * dpi).round();
    (width_px as u32, height_px as u32)
}

/// Export dimensions with the multiplier applied. Unrounded; fractional
/// pixel counts are valid output and formatted at display time.
pub fn compute_scaled(width_px: u32, height_px: u32, multiplier: f64) -> (f64, f64) {
    (width_px as f64 * multiplier, height_px as f64 * multiplier)
}

/// Inch equivalents, unrounded.
pub fn compute_inches(width_mm: f64, height_mm: f64) -> (f64, f64) {
    (inch_from_mm(width_mm), inch_from_mm(height_mm))
}

/// Aspect-fit preview rectangle.
///
/// ratio ≥ 1 (landscape or square): width pins to `max_long_side`.
/// ratio < 1 (portrait): height pins to `max_short_side`. Either way the
/// box never exceeds the fixed bounds, whatever the input magnitude.
pub fn compute_preview_box(
    width_mm: f64,
    height_mm: f64,
    max_long_side: f64,
    max_short_side: f64,
) -> (f64, f64) {
    let ratio = width_mm / height_mm;
    if ratio >= 1.0 {
        (max_long_side, max_long_side / ratio)
    } else {
        (max_short_side * ratio, max_short_side)
    }
}

/// Resolves raw DPI input: finite and positive keeps the value, anything
/// else falls back to [`DEFAULT_DPI`]. This is the only DPI fallback rule;
/// the [`DPI_MIN`]/[`DPI_MAX`] range is advisory for the input field.
pub fn resolve_dpi(raw_dpi: f64) -> f64 {
    if raw_dpi.is_finite() && raw_dpi > 0.0 {
        raw_dpi
    } else {
        DEFAULT_DPI
    }
}
