use thiserror::Error;

// Main Application Error Type

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Intake Error: {0}")]
    Intake(#[from] IntakeError),
    #[error("Analysis Error: {0}")]
    Analysis(#[from] AnalysisError),
    #[error("Classifier Error: {0}")]
    Classifier(#[from] ClassifierError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Whether a transport in front of the pipeline should surface this as
    /// a client fault (a 400-equivalent) rather than a server fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, AppError::Intake(_) | AppError::Analysis(_))
    }
}

/// Failures of the contrast pipeline itself. All of these are fatal to the
/// request that raised them; no partial report is produced.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),
    #[error("Every pixel falls below the alpha threshold; the image is fully transparent")]
    NoOpaquePixels,
    #[error("The image contains a single color and cannot be analyzed for contrast")]
    SingleColorImage,
}

/// Boundary validation failures, detected before the pipeline runs.
#[derive(Error, Debug)]
pub enum IntakeError {
    #[error("Payload of {size} bytes exceeds the {limit} byte ceiling")]
    PayloadTooLarge { size: usize, limit: usize },
    #[error("Unsupported input type: {0}")]
    UnsupportedInputType(String),
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Failures of the external classification collaborator. Never fatal to an
/// analysis; the pipeline degrades to an empty classification list.
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Classification service unavailable: {0}")]
    Unavailable(String),
    #[error("Classification timed out after {0} ms")]
    Timeout(u64),
    #[error("Malformed classification response: {0}")]
    MalformedResponse(String),
}
