pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod intake;
pub mod pipeline;

pub use error::{AnalysisError, AppError, ClassifierError, IntakeError};

pub use analysis::{AnalysisReport, Color, ContrastAnalyzer, PixelBuffer};
pub use config::Configuration;
pub use pipeline::AnalysisService;
