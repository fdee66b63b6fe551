//! Shared judge-call plumbing

use crate::error::QualityError;
use fresco_domain::LlmProvider;
use std::sync::Arc;

/// Run a blocking provider call off the async executor
pub(crate) async fn call_blocking<L>(
    provider: Arc<L>,
    system: &'static str,
    prompt: String,
) -> Result<String, QualityError>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    tokio::task::spawn_blocking(move || {
        provider
            .generate(system, &prompt)
            .map_err(|e| QualityError::Judge(e.to_string()))
    })
    .await
    .map_err(|e| QualityError::Task(format!("Task join error: {}", e)))?
}
