//! State transitions for the calculator.
//!
//! One pure reducer per UI operation: each takes the caller's current state
//! by reference and returns the next state, so the presentation layer owns
//! the single mutable copy and the engine stays stateless. Raw input text is
//! parsed here with a retain-last-valid fallback so NaN never reaches the
//! math in [`crate::convert`].

use crate::catalog::{find_preset, first_in_series};
use crate::convert::{
    compute_inches, compute_pixels, compute_preview_box, compute_scaled, resolve_dpi,
    PREVIEW_LONG_SIDE, PREVIEW_SHORT_SIDE,
};
use crate::schema::{
    Action, Axis, CalculatorState, ConvertError, DerivedOutput, Series,
};

/// Parses numeric input text. `None` for anything that is not a finite
/// number, including "NaN"/"inf" spellings, so callers keep the prior value.
fn parse_finite(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Adopts a catalog preset: width, height, preset id, and series all change
/// together, or not at all when the id is unknown.
pub fn select_preset(
    state: &CalculatorState,
    preset_id: &str,
) -> Result<CalculatorState, ConvertError> {
    let preset =
        find_preset(preset_id).ok_or_else(|| ConvertError::UnknownPreset(preset_id.into()))?;

    let mut next = state.clone();
    next.dimensions.width_mm = preset.width_mm;
    next.dimensions.height_mm = preset.height_mm;
    next.dimensions.active_preset_id = Some(preset.id.into());
    next.dimensions.series = Series::of(preset.id);
    Ok(next)
}

/// Switches the visible series. If the active preset already belongs to the
/// new series only the filter changes; otherwise the selection snaps to the
/// first catalog entry of that series.
pub fn switch_series(state: &CalculatorState, series: Series) -> CalculatorState {
    let mut next = state.clone();
    next.dimensions.series = series;

    let already_in_series = state
        .dimensions
        .active_preset_id
        .as_deref()
        .is_some_and(|id| Series::of(id) == series);
    if !already_in_series {
        let preset = first_in_series(series);
        next.dimensions.width_mm = preset.width_mm;
        next.dimensions.height_mm = preset.height_mm;
        next.dimensions.active_preset_id = Some(preset.id.into());
    }
    next
}

/// Overwrites one dimension from raw input text; the other axis is left
/// alone. Unparseable text keeps the prior value. The active preset id is
/// deliberately not cleared even when the pair no longer matches it.
pub fn set_manual_dimension(
    state: &CalculatorState,
    axis: Axis,
    raw_value: &str,
) -> CalculatorState {
    let mut next = state.clone();
    if let Some(value) = parse_finite(raw_value) {
        match axis {
            Axis::Width => next.dimensions.width_mm = value,
            Axis::Height => next.dimensions.height_mm = value,
        }
    }
    next
}

/// Exchanges width and height exactly. Preset id and series are untouched,
/// even though the swapped pair may no longer match the preset's declared
/// orientation. Applying this twice restores the original pair.
pub fn swap_orientation(state: &CalculatorState) -> CalculatorState {
    let mut next = state.clone();
    next.dimensions.width_mm = state.dimensions.height_mm;
    next.dimensions.height_mm = state.dimensions.width_mm;
    next
}

/// Stores raw DPI input. Unparseable text keeps the prior value; parseable
/// but non-positive values are stored as-is and resolved to the default at
/// computation time (see [`resolve_dpi`]).
pub fn set_dpi(state: &CalculatorState, raw_value: &str) -> CalculatorState {
    let mut next = state.clone();
    if let Some(dpi) = parse_finite(raw_value) {
        next.render.dpi = dpi;
    }
    next
}

/// Stores the export multiplier. Unparseable text keeps the prior value.
pub fn set_multiplier(state: &CalculatorState, raw_value: &str) -> CalculatorState {
    let mut next = state.clone();
    if let Some(multiplier) = parse_finite(raw_value) {
        next.render.multiplier = multiplier;
    }
    next
}

/// Applies a UI action to the state.
///
/// Series strings that parse to neither "A" nor "B" and unknown preset ids
/// are errors; everything else degrades to retain-prior semantics inside
/// the individual reducers.
pub fn apply(state: &CalculatorState, action: &Action) -> Result<CalculatorState, ConvertError> {
    match action {
        Action::SelectPreset(id) => select_preset(state, id),
        Action::SwitchSeries(raw) => {
            let series = Series::parse(raw)
                .ok_or_else(|| ConvertError::BadAction(format!("unknown series: {raw}")))?;
            Ok(switch_series(state, series))
        }
        Action::SetWidth(raw) => Ok(set_manual_dimension(state, Axis::Width, raw)),
        Action::SetHeight(raw) => Ok(set_manual_dimension(state, Axis::Height, raw)),
        Action::SetDpi(raw) => Ok(set_dpi(state, raw)),
        Action::SetMultiplier(raw) => Ok(set_multiplier(state, raw)),
        Action::SwapOrientation => Ok(swap_orientation(state)),
    }
}

/// Computes the full derived output for a state. Recomputed on every call;
/// nothing is cached.
pub fn derive(state: &CalculatorState) -> DerivedOutput {
    let width_mm = state.dimensions.width_mm;
    let height_mm = state.dimensions.height_mm;
    let dpi = resolve_dpi(state.render.dpi);

    let (width_px, height_px) = compute_pixels(width_mm, height_mm, dpi);
    let (scaled_width_px, scaled_height_px) =
        compute_scaled(width_px, height_px, state.render.multiplier);
    let (width_inch, height_inch) = compute_inches(width_mm, height_mm);
    let (preview_width, preview_height) =
        compute_preview_box(width_mm, height_mm, PREVIEW_LONG_SIDE, PREVIEW_SHORT_SIDE);

    DerivedOutput {
        width_px,
        height_px,
        scaled_width_px,
        scaled_height_px,
        width_inch,
        height_inch,
        preview_width,
        preview_height,
    }
}
