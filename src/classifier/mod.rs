use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::analysis::Classification;
use crate::config::ClassifierConfig;
use crate::error::ClassifierError;

/// One label/score entry as returned by the external model.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LabelScore {
    pub label: String,
    /// Model confidence in [0, 1].
    pub score: f64,
}

/// External image-classification collaborator. Implementations wrap
/// whatever inference service a deployment uses; the pipeline only sees
/// this boundary and never depends on a particular model or transport.
#[async_trait]
pub trait ImageClassifier: Send + Sync {
    async fn classify(&self, image: &[u8]) -> Result<Vec<LabelScore>, ClassifierError>;
}

/// Convert an external response into report classifications, keeping at
/// most `max_labels` entries in their original order.
pub fn to_classifications(labels: Vec<LabelScore>, max_labels: usize) -> Vec<Classification> {
    labels
        .into_iter()
        .take(max_labels)
        .map(|entry| Classification::new(entry.label, entry.score))
        .collect()
}

/// Run the classifier under the configured deadline.
///
/// Classification is best effort: a slow, failed, or absent service must
/// never sink the contrast result, so every failure path degrades to an
/// empty list.
pub async fn classify_best_effort(
    classifier: &dyn ImageClassifier,
    image: &[u8],
    config: &ClassifierConfig,
) -> Vec<Classification> {
    let deadline = Duration::from_millis(config.timeout_ms);
    let outcome = match tokio::time::timeout(deadline, classifier.classify(image)).await {
        Ok(result) => result,
        Err(_) => Err(ClassifierError::Timeout(config.timeout_ms)),
    };

    match outcome {
        Ok(labels) => {
            debug!("classifier returned {} labels", labels.len());
            to_classifications(labels, config.max_labels)
        }
        Err(e) => {
            warn!("classification unavailable, continuing without labels: {e}");
            Vec::new()
        }
    }
}
