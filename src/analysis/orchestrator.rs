use tracing::{debug, info};

use crate::analysis::{
    buffer::PixelBuffer,
    color::Color,
    config::AnalysisConfig,
    contrast::{self, ComplianceVerdict},
    extractor, guard,
    report::{AnalysisReport, Classification, ColorPair},
};
use crate::error::{AnalysisError, AppError};

/// Maximum number of external classifications attached to a report.
pub const MAX_CLASSIFICATIONS: usize = 5;

/// Drives one full analysis from decoded pixels to an [`AnalysisReport`]:
/// single-color guard, dominant-color extraction, contrast against the
/// white and black reference backgrounds, compliance verdict, then the
/// merge of any externally supplied classifications.
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// analyses.
pub struct ContrastAnalyzer {
    config: AnalysisConfig,
}

impl ContrastAnalyzer {
    pub fn new(config: AnalysisConfig) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|e| AppError::Config(format!("Invalid analysis config: {e}")))?;
        Ok(Self { config })
    }

    /// Analyze a buffer with no external classifications.
    pub fn analyze(&self, buffer: &PixelBuffer) -> Result<AnalysisReport, AnalysisError> {
        self.analyze_with_classifications(buffer, Vec::new())
    }

    /// Run the full pipeline. `classifications` come from the external
    /// classification collaborator and may be empty; they are attached
    /// verbatim (capped at [`MAX_CLASSIFICATIONS`]) and never influence the
    /// contrast result.
    pub fn analyze_with_classifications(
        &self,
        buffer: &PixelBuffer,
        mut classifications: Vec<Classification>,
    ) -> Result<AnalysisReport, AnalysisError> {
        if guard::is_single_color(buffer) {
            return Err(AnalysisError::SingleColorImage);
        }

        let dominant = extractor::dominant_color(buffer, &self.config)?;
        debug!(
            "dominant color {} across {} pixels",
            dominant,
            buffer.pixel_count()
        );

        let white_ratio = contrast::contrast_ratio(dominant, Color::WHITE);
        let black_ratio = contrast::contrast_ratio(dominant, Color::BLACK);
        let best = white_ratio.max(black_ratio);
        let verdict = ComplianceVerdict::from_ratio(best);

        classifications.truncate(MAX_CLASSIFICATIONS);

        info!(
            "contrast {:.2}:1 against the better reference (AA: {}, AAA: {})",
            best, verdict.passes_aa, verdict.passes_aaa
        );

        Ok(AnalysisReport {
            contrast_ratio: contrast::round_ratio(best),
            passes_wcag_aa: verdict.passes_aa,
            passes_wcag_aaa: verdict.passes_aaa,
            color_pairs: vec![
                ColorPair {
                    foreground: dominant,
                    background: Color::WHITE,
                    ratio: contrast::round_ratio(white_ratio),
                },
                ColorPair {
                    foreground: dominant,
                    background: Color::BLACK,
                    ratio: contrast::round_ratio(black_ratio),
                },
            ],
            classifications,
        })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }
}
