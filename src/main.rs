use a11y_analyzer::{intake::UploadRequest, AnalysisService, AppError, Configuration};
use tower::Service;
use tracing::{error, Level};

fn init_logging() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_logging();
    let configuration = Configuration::load()?;

    let Some(path) = std::env::args().nth(1) else {
        error!("usage: a11y-analyzer <image-file>");
        return Ok(());
    };

    let bytes = tokio::fs::read(&path).await?;
    let request = UploadRequest::new(bytes);

    let mut service = AnalysisService::new(configuration)?;
    let report = service.call(request).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
