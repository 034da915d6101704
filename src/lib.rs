mod assembly;
mod catalog;
mod convert;
mod format;
mod schema;
mod state;

pub use assembly::{
    apply_action, catalog_json, default_state, derive_output, display_output, dpi_choices_json,
};
pub use catalog::{filter_by_series, find_preset, first_in_series, DPI_CHOICES, PAPER_PRESETS};
pub use convert::{
    compute_inches, compute_pixels, compute_preview_box, compute_scaled, resolve_dpi, DEFAULT_DPI,
    DPI_MAX, DPI_MIN, MM_PER_INCH, MULTIPLIER_STEP, PREVIEW_LONG_SIDE, PREVIEW_SHORT_SIDE,
};
pub use format::{format_inches, format_px};
pub use schema::{
    Action, Axis, CalculatorState, ConvertError, DerivedOutput, DimensionState, DpiChoice,
    PaperPreset, RenderConfig, Series,
};
pub use state::{
    apply, derive, select_preset, set_dpi, set_manual_dimension, set_multiplier, swap_orientation,
    switch_series,
};
