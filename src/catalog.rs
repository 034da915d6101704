//! Embedded paper-size catalog.
//!
//! The full ISO 216 A and B tables (A0–A10, B0–B6) as a compiled-in
//! constant, plus the DPI quick-select choices. Nothing here is loaded from
//! external storage or mutated after process start.

use crate::schema::{DpiChoice, PaperPreset, Series};

/// All 18 presets in declared order: A-series first, then B-series.
pub const PAPER_PRESETS: &[PaperPreset] = &[
    PaperPreset { id: "A0", label: "A0", width_mm: 841.0, height_mm: 1189.0 },
    PaperPreset { id: "A1", label: "A1", width_mm: 594.0, height_mm: 841.0 },
    PaperPreset { id: "A2", label: "A2", width_mm: 420.0, height_mm: 594.0 },
    PaperPreset { id: "A3", label: "A3", width_mm: 297.0, height_mm: 420.0 },
    PaperPreset { id: "A4", label: "A4", width_mm: 210.0, height_mm: 297.0 },
    PaperPreset { id: "A5", label: "A5", width_mm: 148.0, height_mm: 210.0 },
    PaperPreset { id: "A6", label: "A6", width_mm: 105.0, height_mm: 148.0 },
    PaperPreset { id: "A7", label: "A7", width_mm: 74.0, height_mm: 105.0 },
    PaperPreset { id: "A8", label: "A8", width_mm: 52.0, height_mm: 74.0 },
    PaperPreset { id: "A9", label: "A9", width_mm: 37.0, height_mm: 52.0 },
    PaperPreset { id: "A10", label: "A10", width_mm: 26.0, height_mm: 37.0 },
    PaperPreset { id: "B0", label: "B0", width_mm: 1000.0, height_mm: 1414.0 },
    PaperPreset { id: "B1", label: "B1", width_mm: 707.0, height_mm: 1000.0 },
    PaperPreset { id: "B2", label: "B2", width_mm: 500.0, height_mm: 707.0 },
    PaperPreset { id: "B3", label: "B3", width_mm: 353.0, height_mm: 500.0 },
    PaperPreset { id: "B4", label: "B4", width_mm: 250.0, height_mm: 353.0 },
    PaperPreset { id: "B5", label: "B5", width_mm: 176.0, height_mm: 250.0 },
    PaperPreset { id: "B6", label: "B6", width_mm: 125.0, height_mm: 176.0 },
];

/// Suggested resolutions surfaced as quick-select buttons.
pub const DPI_CHOICES: &[DpiChoice] = &[
    DpiChoice { dpi: 72.0, label: "Screen display / low-res preview" },
    DpiChoice { dpi: 150.0, label: "Proofing / draft print" },
    DpiChoice { dpi: 300.0, label: "Production print / high quality" },
    DpiChoice { dpi: 350.0, label: "Fine-art print / ultra fine" },
];

/// Looks up a preset by id. `None` means the id is not in the catalog.
pub fn find_preset(id: &str) -> Option<&'static PaperPreset> {
    PAPER_PRESETS.iter().find(|preset| preset.id == id)
}

/// The ordered sub-sequence of the catalog belonging to a series.
///
/// Derived from the const table on every call, so it can never drift from
/// the series toggle.
pub fn filter_by_series(series: Series) -> impl Iterator<Item = &'static PaperPreset> {
    PAPER_PRESETS
        .iter()
        .filter(move |preset| Series::of(preset.id) == series)
}

/// First catalog entry of a series, in declared order ("A0" / "B0").
pub fn first_in_series(series: Series) -> &'static PaperPreset {
    // The catalog always contains both series, so this cannot miss.
    filter_by_series(series)
        .next()
        .unwrap_or(&PAPER_PRESETS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_18_entries() {
        assert_eq!(PAPER_PRESETS.len(), 18);
    }

    #[test]
    fn test_series_partition_counts() {
        assert_eq!(filter_by_series(Series::A).count(), 11);
        assert_eq!(filter_by_series(Series::B).count(), 7);
    }

    #[test]
    fn test_filter_preserves_catalog_order() {
        let a_ids: Vec<&str> = filter_by_series(Series::A).map(|p| p.id).collect();
        assert_eq!(
            a_ids,
            ["A0", "A1", "A2", "A3", "A4", "A5", "A6", "A7", "A8", "A9", "A10"]
        );

        let b_ids: Vec<&str> = filter_by_series(Series::B).map(|p| p.id).collect();
        assert_eq!(b_ids, ["B0", "B1", "B2", "B3", "B4", "B5", "B6"]);
    }

    #[test]
    fn test_find_preset() {
        let a4 = find_preset("A4").unwrap();
        assert_eq!(a4.width_mm, 210.0);
        assert_eq!(a4.height_mm, 297.0);

        assert!(find_preset("C5").is_none());
        assert!(find_preset("").is_none());
    }

    #[test]
    fn test_first_in_series() {
        assert_eq!(first_in_series(Series::A).id, "A0");
        let b0 = first_in_series(Series::B);
        assert_eq!(b0.id, "B0");
        assert_eq!((b0.width_mm, b0.height_mm), (1000.0, 1414.0));
    }

    #[test]
    fn test_all_presets_are_positive_portrait() {
        for preset in PAPER_PRESETS {
            assert!(preset.width_mm > 0.0, "{} width", preset.id);
            assert!(preset.height_mm > 0.0, "{} height", preset.id);
            assert!(
                preset.width_mm < preset.height_mm,
                "{} should be portrait",
                preset.id
            );
        }
    }
}
