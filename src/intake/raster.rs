use serde::Deserialize;

use crate::analysis::PixelBuffer;
use crate::error::IntakeError;

/// Target geometry for rasterizing vector input before analysis.
///
/// The scale factor supersamples the canvas, which changes the resolution
/// at which a vector's colors are sampled and therefore can change the
/// computed dominant color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RasterizeOptions {
    pub width: u32,
    pub height: u32,
    pub scale: u32,
}

impl Default for RasterizeOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            scale: 2,
        }
    }
}

impl RasterizeOptions {
    /// Pixel dimensions of the rasterized canvas.
    pub fn canvas_size(&self) -> (u32, u32) {
        (self.width * self.scale, self.height * self.scale)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 || self.scale == 0 {
            return Err("Rasterization target dimensions must be non-zero".to_string());
        }
        Ok(())
    }
}

/// Seam for the external vector rasterizer. The analyzer contains no
/// vector logic of its own; SVG input must pass through an implementation
/// of this trait to become a [`PixelBuffer`] before entering the pipeline.
pub trait Rasterizer: Send + Sync {
    fn rasterize(&self, svg: &[u8], options: &RasterizeOptions)
        -> Result<PixelBuffer, IntakeError>;
}
