use indexmap::IndexMap;

use crate::analysis::{buffer::PixelBuffer, color::Color, config::AnalysisConfig};
use crate::error::AnalysisError;

#[derive(Default)]
struct BinStat {
    count: u64,
    sum_r: u64,
    sum_g: u64,
    sum_b: u64,
}

impl BinStat {
    fn mean(&self) -> Color {
        let channel = |sum: u64| (sum as f64 / self.count as f64).round() as u8;
        Color::new(channel(self.sum_r), channel(self.sum_g), channel(self.sum_b))
    }
}

/// Reduce a pixel buffer to one dominant color.
///
/// Opaque-enough pixels (alpha at or above the configured threshold) are
/// binned into a 3-D histogram with `quantization_levels` per channel; the
/// winning bin's color is the per-channel mean of its actual member pixels.
/// Exact count ties go to the bin whose first member appears earliest in
/// row-major scan order: the histogram is insertion-ordered and the max
/// scan below only replaces the leader on a strictly greater count.
pub fn dominant_color(
    buffer: &PixelBuffer,
    config: &AnalysisConfig,
) -> Result<Color, AnalysisError> {
    let step = (256 / config.quantization_levels) as usize;
    let quantize = |channel: u8| ((channel as usize / step) * step).min(255) as u8;

    let mut histogram: IndexMap<(u8, u8, u8), BinStat> = IndexMap::new();
    for [r, g, b, a] in buffer.pixels() {
        if a < config.alpha_threshold {
            continue;
        }
        let stat = histogram
            .entry((quantize(r), quantize(g), quantize(b)))
            .or_default();
        stat.count += 1;
        stat.sum_r += r as u64;
        stat.sum_g += g as u64;
        stat.sum_b += b as u64;
    }

    let mut bins = histogram.values();
    let mut winner = bins.next().ok_or(AnalysisError::NoOpaquePixels)?;
    for stat in bins {
        if stat.count > winner.count {
            winner = stat;
        }
    }
    Ok(winner.mean())
}
