use serde::Deserialize;

/// Tunable parameters for the pixel-statistics stage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Pixels with alpha below this value are treated as background
    /// transparency and excluded from the dominant-color statistic.
    pub alpha_threshold: u8,
    /// Histogram levels per channel; must divide 256 evenly (e.g. 16 or 32).
    pub quantization_levels: u16,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            alpha_threshold: 8,
            quantization_levels: 16,
        }
    }
}

impl AnalysisConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.quantization_levels < 2 {
            return Err("Quantization needs at least two levels per channel".to_string());
        }
        if self.quantization_levels > 256 || 256 % self.quantization_levels != 0 {
            return Err(format!(
                "Quantization levels must divide 256 evenly, got {}",
                self.quantization_levels
            ));
        }
        Ok(())
    }

    /// Set the alpha exclusion threshold
    pub fn with_alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// Set histogram levels per channel
    pub fn with_quantization_levels(mut self, levels: u16) -> Self {
        self.quantization_levels = levels;
        self
    }
}
