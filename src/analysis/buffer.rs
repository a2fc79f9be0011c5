use image::RgbaImage;

use crate::error::AnalysisError;

/// Decoded RGBA pixel data for one analysis request.
///
/// Invariant: `data.len() == width * height * 4` and the buffer is
/// non-empty. The buffer is immutable once constructed; the pipeline only
/// ever borrows it for the duration of a single analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, AnalysisError> {
        if data.is_empty() || data.len() % 4 != 0 {
            return Err(AnalysisError::InvalidBuffer(format!(
                "buffer length {} is not a positive multiple of 4",
                data.len()
            )));
        }
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(AnalysisError::InvalidBuffer(format!(
                "expected {width}x{height}x4 = {expected} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / 4
    }

    /// Iterate RGBA quadruples in row-major scan order.
    pub fn pixels(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.data
            .chunks_exact(4)
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}

impl From<RgbaImage> for PixelBuffer {
    fn from(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        // RgbaImage guarantees the length invariant
        Self {
            width,
            height,
            data: image.into_raw(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn accepts_well_formed_buffer() {
        let buffer = PixelBuffer::from_raw(2, 1, vec![1, 2, 3, 255, 4, 5, 6, 255]).unwrap();
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 1);
        assert_eq!(buffer.pixel_count(), 2);
        assert_eq!(buffer.pixels().next(), Some([1, 2, 3, 255]));
    }

    #[test]
    fn rejects_empty_buffer() {
        let err = PixelBuffer::from_raw(0, 0, Vec::new()).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidBuffer(_)));
    }

    #[test]
    fn rejects_length_not_multiple_of_four() {
        let err = PixelBuffer::from_raw(1, 1, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidBuffer(_)));
    }

    #[test]
    fn rejects_dimension_mismatch() {
        let err = PixelBuffer::from_raw(3, 3, vec![0; 8]).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidBuffer(_)));
    }

    #[test]
    fn converts_from_decoded_image() {
        let image = RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 255]));
        let buffer = PixelBuffer::from(image);
        assert_eq!(buffer.width(), 4);
        assert_eq!(buffer.height(), 3);
        assert_eq!(buffer.pixel_count(), 12);
        assert!(buffer.pixels().all(|px| px == [10, 20, 30, 255]));
    }
}
