//! WASM-exported functions for the print-size calculator.
//!
//! This module is the bridge between JavaScript and the pure conversion
//! engine. State travels as JSON strings: the JS side owns the current
//! [`CalculatorState`], sends it in with each action, and receives the next
//! state (or derived output) back. Failures come back as `{"error": ...}`
//! JSON rather than exceptions.
//!
//! The exported functions are thin `JsValue` wrappers over string-level
//! helpers so the JSON contract stays testable on native targets.

use crate::catalog::{filter_by_series, DPI_CHOICES, PAPER_PRESETS};
use crate::convert::resolve_dpi;
use crate::format::{format_inches, format_px};
use crate::schema::{Action, CalculatorState, ConvertError, Series};
use crate::state::{apply, derive};
use serde_json::json;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::JsValue;

/// Browser console warning; no-op when compiled for native test targets.
fn warn(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| json!({"error": "serialization failed"}).to_string())
}

fn error_json(err: &ConvertError) -> String {
    json!({"error": err.to_string()}).to_string()
}

fn parse_state(state_json: &str) -> Result<CalculatorState, ConvertError> {
    serde_json::from_str(state_json).map_err(|e| ConvertError::BadState(e.to_string()))
}

fn default_state_json() -> String {
    to_json(&CalculatorState::default())
}

fn catalog_json_str(series: Option<&str>) -> String {
    match series {
        None => to_json(&PAPER_PRESETS),
        Some(raw) => match Series::parse(raw) {
            Some(series) => {
                let filtered: Vec<_> = filter_by_series(series).collect();
                to_json(&filtered)
            }
            None => error_json(&ConvertError::BadAction(format!("unknown series: {raw}"))),
        },
    }
}

fn apply_action_json(state_json: &str, action_json: &str) -> String {
    let state = match parse_state(state_json) {
        Ok(s) => s,
        Err(e) => return error_json(&e),
    };
    let action: Action = match serde_json::from_str(action_json) {
        Ok(a) => a,
        Err(e) => return error_json(&ConvertError::BadAction(e.to_string())),
    };

    match apply(&state, &action) {
        Ok(next) => to_json(&next),
        Err(e) => error_json(&e),
    }
}

fn derive_output_json(state_json: &str) -> String {
    let state = match parse_state(state_json) {
        Ok(s) => s,
        Err(e) => return error_json(&e),
    };

    let dpi = state.render.dpi;
    if resolve_dpi(dpi) != dpi {
        warn(&format!("dpi {dpi} is not a positive finite value; using 300"));
    }

    to_json(&derive(&state))
}

fn display_output_json(state_json: &str) -> String {
    let state = match parse_state(state_json) {
        Ok(s) => s,
        Err(e) => return error_json(&e),
    };
    let out = derive(&state);

    json!({
        "width_px": format_px(out.width_px as f64),
        "height_px": format_px(out.height_px as f64),
        "scaled_width_px": format_px(out.scaled_width_px),
        "scaled_height_px": format_px(out.scaled_height_px),
        "width_inch": format_inches(out.width_inch),
        "height_inch": format_inches(out.height_inch),
    })
    .to_string()
}

/// Initial calculator state as JSON: A4 portrait, 300 DPI, 2x export.
#[wasm_bindgen]
pub fn default_state() -> JsValue {
    JsValue::from_str(&default_state_json())
}

/// The preset catalog as JSON, for rendering the size buttons.
///
/// With `series` = "A" or "B" only that series is returned, in catalog
/// order; with `None` the full 18-entry table comes back.
#[wasm_bindgen]
pub fn catalog_json(series: Option<String>) -> JsValue {
    JsValue::from_str(&catalog_json_str(series.as_deref()))
}

/// The DPI quick-select table as JSON.
#[wasm_bindgen]
pub fn dpi_choices_json() -> JsValue {
    JsValue::from_str(&to_json(&DPI_CHOICES))
}

/// Applies one UI action to the given state and returns the next state.
///
/// `state_json` is a serialized [`CalculatorState`]; `action_json` is a
/// tagged [`Action`], e.g. `{"kind":"SelectPreset","value":"A3"}` or
/// `{"kind":"SwapOrientation"}`. On any failure the caller keeps its
/// current state and receives `{"error": ...}`.
#[wasm_bindgen]
pub fn apply_action(state_json: &str, action_json: &str) -> JsValue {
    JsValue::from_str(&apply_action_json(state_json, action_json))
}

/// Computes the derived output (pixels, scaled export, inches, preview box)
/// for a state. Recomputed from scratch on every call.
#[wasm_bindgen]
pub fn derive_output(state_json: &str) -> JsValue {
    JsValue::from_str(&derive_output_json(state_json))
}

/// Display-ready strings for the result panel: grouped pixel counts and
/// two-decimal inch values, matching how the numbers are shown.
#[wasm_bindgen]
pub fn display_output(state_json: &str) -> JsValue {
    JsValue::from_str(&display_output_json(state_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_round_trips() {
        let state: CalculatorState = serde_json::from_str(&default_state_json()).unwrap();
        assert_eq!(state, CalculatorState::default());
    }

    #[test]
    fn test_apply_action_select_preset() {
        let state = default_state_json();
        let next = apply_action_json(&state, r#"{"kind":"SelectPreset","value":"A3"}"#);
        let next: CalculatorState = serde_json::from_str(&next).unwrap();
        assert_eq!(next.dimensions.width_mm, 297.0);
        assert_eq!(next.dimensions.height_mm, 420.0);
        assert_eq!(next.dimensions.active_preset_id.as_deref(), Some("A3"));
    }

    #[test]
    fn test_apply_action_reports_errors_as_json() {
        let state = default_state_json();
        let out = apply_action_json(&state, r#"{"kind":"SelectPreset","value":"Z9"}"#);
        assert!(out.contains("\"error\""), "{out}");

        let out = apply_action_json("not json", r#"{"kind":"SwapOrientation"}"#);
        assert!(out.contains("\"error\""), "{out}");

        let out = apply_action_json(&state, "not json");
        assert!(out.contains("\"error\""), "{out}");
    }

    #[test]
    fn test_derive_output_json() {
        let out = derive_output_json(&default_state_json());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["width_px"], 2480);
        assert_eq!(parsed["height_px"], 3508);
        assert_eq!(parsed["scaled_width_px"], 4960.0);
        assert_eq!(parsed["scaled_height_px"], 7016.0);
        assert_eq!(parsed["preview_height"], 180.0);
    }

    #[test]
    fn test_derive_output_with_bad_stored_dpi_falls_back() {
        let mut state = CalculatorState::default();
        state.render.dpi = -5.0;
        let out = derive_output_json(&to_json(&state));
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["width_px"], 2480);
    }

    #[test]
    fn test_display_output_formats() {
        let out = display_output_json(&default_state_json());
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["width_px"], "2,480");
        assert_eq!(parsed["scaled_height_px"], "7,016");
        assert_eq!(parsed["width_inch"], "8.27");
        assert_eq!(parsed["height_inch"], "11.69");
    }

    #[test]
    fn test_catalog_json_filters() {
        let all: serde_json::Value = serde_json::from_str(&catalog_json_str(None)).unwrap();
        assert_eq!(all.as_array().unwrap().len(), 18);

        let b: serde_json::Value = serde_json::from_str(&catalog_json_str(Some("B"))).unwrap();
        assert_eq!(b.as_array().unwrap().len(), 7);
        assert_eq!(b[0]["id"], "B0");

        assert!(catalog_json_str(Some("C")).contains("\"error\""));
    }

    #[test]
    fn test_dpi_choices_serialize() {
        let parsed: serde_json::Value = serde_json::from_str(&to_json(&DPI_CHOICES)).unwrap();
        let dpis: Vec<f64> = parsed
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["dpi"].as_f64().unwrap())
            .collect();
        assert_eq!(dpis, [72.0, 150.0, 300.0, 350.0]);
    }
}
