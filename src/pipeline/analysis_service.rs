use std::pin::Pin;
use std::sync::Arc;

use futures::task::{Context, Poll};
use futures::Future;
use tower::Service;
use tracing::{debug, info};

use crate::{
    analysis::{AnalysisReport, ContrastAnalyzer},
    classifier::{classify_best_effort, ImageClassifier},
    config::Configuration,
    error::AppError,
    intake::{self, UploadRequest},
};

/// End-to-end analysis stage: intake validation, decode, best-effort
/// classification, then the contrast pipeline.
///
/// Requests are independent; cloning the service shares the analyzer and
/// configuration but no per-request state, so clones can serve concurrent
/// uploads from separate tasks.
#[derive(Clone)]
pub struct AnalysisService {
    analyzer: Arc<ContrastAnalyzer>,
    classifier: Option<Arc<dyn ImageClassifier>>,
    config: Arc<Configuration>,
}

impl AnalysisService {
    pub fn new(config: Configuration) -> Result<Self, AppError> {
        let analyzer = ContrastAnalyzer::new(config.analysis.clone())?;
        Ok(Self {
            analyzer: Arc::new(analyzer),
            classifier: None,
            config: Arc::new(config),
        })
    }

    /// Attach an external classification collaborator. Without one, every
    /// report carries an empty classification list.
    pub fn with_classifier(mut self, classifier: Arc<dyn ImageClassifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    async fn run(
        analyzer: Arc<ContrastAnalyzer>,
        classifier: Option<Arc<dyn ImageClassifier>>,
        config: Arc<Configuration>,
        request: UploadRequest,
    ) -> Result<AnalysisReport, AppError> {
        let buffer = intake::decode(&request, &config.intake)?;
        debug!(
            "request {}: decoded {}x{} buffer",
            request.request_id(),
            buffer.width(),
            buffer.height()
        );

        let classifications = match &classifier {
            Some(service) => {
                classify_best_effort(service.as_ref(), request.bytes(), &config.classifier).await
            }
            None => Vec::new(),
        };

        let report = analyzer.analyze_with_classifications(&buffer, classifications)?;
        info!(
            "request {}: analysis complete at {:.2}:1",
            request.request_id(),
            report.contrast_ratio
        );
        Ok(report)
    }
}

impl Service<UploadRequest> for AnalysisService {
    type Response = AnalysisReport;
    type Error = AppError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: UploadRequest) -> Self::Future {
        let analyzer = self.analyzer.clone();
        let classifier = self.classifier.clone();
        let config = self.config.clone();
        Box::pin(Self::run(analyzer, classifier, config, request))
    }
}
