pub mod buffer;
pub mod color;
pub mod config;
pub mod contrast;
pub mod extractor;
pub mod guard;
pub mod orchestrator;
pub mod report;

pub use buffer::PixelBuffer;
pub use color::Color;
pub use config::AnalysisConfig;
pub use contrast::ComplianceVerdict;
pub use orchestrator::ContrastAnalyzer;
pub use report::{AnalysisReport, Classification, ColorPair};
