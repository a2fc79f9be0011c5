use serde::Serialize;

use crate::analysis::color::Color;

/// One foreground/background pairing with its reported (rounded) ratio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorPair {
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
}

/// One label from the external classification service, with its confidence
/// already formatted for display. Opaque to the contrast pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub label: String,
    pub confidence: String,
}

impl Classification {
    /// Format an external score in [0, 1] as a percentage string with two
    /// decimal places.
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            confidence: format!("{:.2}%", score * 100.0),
        }
    }
}

/// Terminal, immutable output of one analysis.
///
/// The serialized field names are the external contract consumed by
/// whatever transport sits in front of the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Best ratio among the reference pairings, rounded to 2 decimals.
    pub contrast_ratio: f64,
    pub passes_wcag_aa: bool,
    pub passes_wcag_aaa: bool,
    pub color_pairs: Vec<ColorPair>,
    /// At most five entries, in the order the external service returned
    /// them; empty when classification was unavailable.
    pub classifications: Vec<Classification>,
}
