use async_trait::async_trait;

use crate::errors::Result;

/// Trait for enrichment service operations
#[async_trait]
pub trait EnrichmentServiceTrait: Send + Sync {
    /// Runs one best-effort enrichment attempt for an already persisted
    /// record. Never retried; the caller is expected to log and drop the
    /// error.
    async fn enrich(&self, feedback_id: i32, name: &str, message: &str) -> Result<()>;
}
