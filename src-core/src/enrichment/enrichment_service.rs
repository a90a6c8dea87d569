use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

use crate::enrichment::enrichment_model::{EnrichmentRequest, EnrichmentResponse};
use crate::enrichment::enrichment_traits::EnrichmentServiceTrait;
use crate::errors::{EnrichmentError, Result};
use crate::feedback::feedback_traits::FeedbackRepositoryTrait;

/// Bound on a single webhook round-trip. There is no retry, so this is
/// also the bound on the whole enrichment attempt.
const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(15);

pub struct EnrichmentService<T: FeedbackRepositoryTrait> {
    feedback_repo: Arc<T>,
    client: Client,
    webhook_url: Option<String>,
}

impl<T: FeedbackRepositoryTrait> EnrichmentService<T> {
    pub fn new(feedback_repo: Arc<T>, webhook_url: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(WEBHOOK_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        EnrichmentService {
            feedback_repo,
            client,
            webhook_url,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[async_trait]
impl<T: FeedbackRepositoryTrait + Send + Sync> EnrichmentServiceTrait for EnrichmentService<T> {
    async fn enrich(&self, feedback_id: i32, name: &str, message: &str) -> Result<()> {
        let Some(url) = self.webhook_url.as_deref() else {
            debug!(
                "No enrichment webhook configured, skipping feedback {}",
                feedback_id
            );
            return Ok(());
        };

        let payload = EnrichmentRequest {
            id: feedback_id,
            name,
            message,
        };
        let response = self
            .client
            .post(url)
            .json(&payload)
            .send()
            .await
            .map_err(EnrichmentError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()).into());
        }

        // A webhook that answers 2xx with a non-JSON body still counts as
        // a completed attempt with nothing extracted.
        let result = response
            .json::<EnrichmentResponse>()
            .await
            .unwrap_or_else(|err| {
                warn!(
                    "Unparseable enrichment response for feedback {}: {}",
                    feedback_id, err
                );
                EnrichmentResponse::default()
            });

        let new_sentiment = non_empty(result.sentiment);
        let new_summary = non_empty(result.summary);

        // Written even when both came back empty; one attempt per record.
        self.feedback_repo
            .update_enrichment(feedback_id, new_sentiment, new_summary)?;
        debug!("Stored enrichment for feedback {}", feedback_id);

        Ok(())
    }
}
