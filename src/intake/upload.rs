use chrono::{DateTime, Utc};
use image::ImageFormat;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::PixelBuffer;
use crate::config::IntakeConfig;
use crate::error::IntakeError;

/// One uploaded image, captured at the transport boundary. Created fresh
/// per request and dropped once the response is sent.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    request_id: Uuid,
    received_at: DateTime<Utc>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

impl UploadRequest {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            received_at: Utc::now(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Raster formats accepted at the boundary. Vector input (SVG) never
/// reaches this check: it must arrive pre-rasterized through the
/// [`crate::intake::raster::Rasterizer`] seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportedFormat {
    Jpeg,
    Png,
    Bmp,
    Gif,
}

impl SupportedFormat {
    fn from_image_format(format: ImageFormat) -> Option<Self> {
        match format {
            ImageFormat::Jpeg => Some(Self::Jpeg),
            ImageFormat::Png => Some(Self::Png),
            ImageFormat::Bmp => Some(Self::Bmp),
            ImageFormat::Gif => Some(Self::Gif),
            _ => None,
        }
    }
}

/// Validate size and format before any decoding happens.
pub fn validate(
    request: &UploadRequest,
    config: &IntakeConfig,
) -> Result<SupportedFormat, IntakeError> {
    if request.bytes().len() > config.max_payload_bytes {
        return Err(IntakeError::PayloadTooLarge {
            size: request.bytes().len(),
            limit: config.max_payload_bytes,
        });
    }

    let format = image::guess_format(request.bytes()).map_err(|_| {
        IntakeError::UnsupportedInputType(
            request
                .content_type
                .clone()
                .unwrap_or_else(|| "unrecognized image data".to_string()),
        )
    })?;

    SupportedFormat::from_image_format(format)
        .ok_or_else(|| IntakeError::UnsupportedInputType(format!("{format:?}")))
}

/// Decode a validated upload into the pixel buffer the pipeline consumes.
pub fn decode(request: &UploadRequest, config: &IntakeConfig) -> Result<PixelBuffer, IntakeError> {
    let format = validate(request, config)?;
    debug!(
        "request {}: decoding {} byte {:?} upload",
        request.request_id(),
        request.bytes().len(),
        format
    );
    let decoded = image::load_from_memory(request.bytes())?;
    Ok(PixelBuffer::from(decoded.to_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn oversized_payload_is_rejected_before_decoding() {
        let config = IntakeConfig {
            max_payload_bytes: 16,
            ..IntakeConfig::default()
        };
        let request = UploadRequest::new(vec![0; 17]);
        let err = validate(&request, &config).unwrap_err();
        assert!(matches!(
            err,
            IntakeError::PayloadTooLarge { size: 17, limit: 16 }
        ));
    }

    #[test]
    fn unrecognizable_bytes_are_rejected() {
        let request = UploadRequest::new(b"not an image at all".to_vec())
            .with_content_type("text/plain");
        let err = validate(&request, &IntakeConfig::default()).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedInputType(_)));
    }

    #[test]
    fn recognized_but_unsupported_format_is_rejected() {
        // Little-endian TIFF magic
        let mut bytes = vec![0x49, 0x49, 0x2A, 0x00];
        bytes.extend_from_slice(&[0; 16]);
        let request = UploadRequest::new(bytes);
        let err = validate(&request, &IntakeConfig::default()).unwrap_err();
        assert!(matches!(err, IntakeError::UnsupportedInputType(_)));
    }

    #[test]
    fn png_upload_decodes_to_pixel_buffer() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        image.put_pixel(1, 1, Rgba([0, 0, 255, 255]));
        let request = UploadRequest::new(png_bytes(&image));

        let buffer = decode(&request, &IntakeConfig::default()).unwrap();
        assert_eq!(buffer.width(), 2);
        assert_eq!(buffer.height(), 2);
        assert_eq!(buffer.pixels().next(), Some([255, 0, 0, 255]));
    }

    #[test]
    fn each_request_gets_a_fresh_identity() {
        let a = UploadRequest::new(Vec::new());
        let b = UploadRequest::new(Vec::new());
        assert_ne!(a.request_id(), b.request_id());
    }
}
