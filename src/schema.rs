//! Data structures and types for the print-size calculator.
//!
//! This module defines the core types used throughout the conversion engine:
//! error types, the preset/series model, the caller-owned calculator state,
//! and the derived output record handed back to the presentation layer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while applying calculator operations.
///
/// Every condition here is recoverable: the boundary reports it and the
/// caller keeps its last-known-good state.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested preset id does not exist in the catalog.
    #[error("Unknown preset id: {0}")]
    UnknownPreset(String),
    /// The state JSON passed across the boundary could not be deserialized.
    #[error("Invalid state: {0}")]
    BadState(String),
    /// The action JSON passed across the boundary could not be deserialized.
    #[error("Invalid action: {0}")]
    BadAction(String),
}

/// ISO 216 paper-size family. A preset belongs to the series matching its
/// id prefix ("A4" is A-series, "B0" is B-series).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Series {
    #[default]
    A,
    B,
}

impl Series {
    /// Series a preset id belongs to, by prefix.
    pub fn of(preset_id: &str) -> Series {
        if preset_id.starts_with('B') {
            Series::B
        } else {
            Series::A
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Series::A => "A",
            Series::B => "B",
        }
    }

    /// Parses "A"/"B" (case-insensitive). Anything else is `None`.
    pub fn parse(s: &str) -> Option<Series> {
        match s.trim() {
            "A" | "a" => Some(Series::A),
            "B" | "b" => Some(Series::B),
            _ => None,
        }
    }
}

/// A named, catalog-defined physical paper size in millimeters.
///
/// Serialize-only: the catalog is compiled in and never read back.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PaperPreset {
    /// Catalog identifier, e.g. "A4".
    pub id: &'static str,
    /// Display name shown on the preset button.
    pub label: &'static str,
    /// Width in millimeters, portrait orientation.
    pub width_mm: f64,
    /// Height in millimeters, portrait orientation.
    pub height_mm: f64,
}

/// A suggested DPI value with a short usage description.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DpiChoice {
    pub dpi: f64,
    /// What this resolution is typically used for.
    pub label: &'static str,
}

/// Which dimension a manual edit targets.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// Physical dimensions plus the preset/series selection that produced them.
///
/// A manual edit may leave `active_preset_id` pointing at a preset whose
/// dimensions no longer match the fields here; reconciling the two is left
/// to the caller if it cares.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DimensionState {
    pub width_mm: f64,
    pub height_mm: f64,
    pub active_preset_id: Option<String>,
    pub series: Series,
}

/// Output resolution settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Dots per inch. Non-finite or non-positive values fall back to 300
    /// at computation time; the [30, 1200] range is advisory for the UI.
    pub dpi: f64,
    /// Export scale factor applied to both pixel dimensions.
    pub multiplier: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dpi: 300.0,
            multiplier: 2.0,
        }
    }
}

/// The full caller-owned state of the calculator.
///
/// The engine never stores this; every operation takes a state in and hands
/// a new one back, so the JS side owns the single source of truth.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub dimensions: DimensionState,
    pub render: RenderConfig,
}

impl Default for CalculatorState {
    fn default() -> Self {
        // A4 portrait at print-standard resolution, 2x export
        Self {
            dimensions: DimensionState {
                width_mm: 210.0,
                height_mm: 297.0,
                active_preset_id: Some("A4".into()),
                series: Series::A,
            },
            render: RenderConfig::default(),
        }
    }
}

/// Everything the presentation layer needs to render the result panel.
///
/// Fully determined by [`CalculatorState`]; recomputed on every read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DerivedOutput {
    /// Pixel dimensions at 1x, rounded to whole pixels.
    pub width_px: u32,
    pub height_px: u32,
    /// Pixel dimensions with the export multiplier applied, unrounded.
    pub scaled_width_px: f64,
    pub scaled_height_px: f64,
    /// Inch equivalents, unrounded (display truncates to 2 decimals).
    pub width_inch: f64,
    pub height_inch: f64,
    /// Preview rectangle in display units, aspect-fit into a fixed box.
    pub preview_width: f64,
    pub preview_height: f64,
}

/// A single state transition, as sent from the UI.
///
/// Numeric fields arrive as the raw input text; parsing (with
/// retain-last-valid fallback) happens inside the reducers.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", content = "value")]
pub enum Action {
    SelectPreset(String),
    SwitchSeries(String),
    SetWidth(String),
    SetHeight(String),
    SetDpi(String),
    SetMultiplier(String),
    SwapOrientation,
}
