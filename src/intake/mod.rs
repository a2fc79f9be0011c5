pub mod raster;
pub mod upload;

pub use raster::{RasterizeOptions, Rasterizer};
pub use upload::{decode, validate, SupportedFormat, UploadRequest};
