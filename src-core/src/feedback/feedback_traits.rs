use crate::errors::Result;
use crate::feedback::feedback_model::{Feedback, NewFeedback};

/// Trait for feedback repository operations
pub trait FeedbackRepositoryTrait: Send + Sync {
    fn insert_feedback(&self, new_feedback: NewFeedback) -> Result<Feedback>;
    fn list_feedback(&self) -> Result<Vec<Feedback>>;
    fn update_enrichment(
        &self,
        feedback_id: i32,
        sentiment: Option<String>,
        summary: Option<String>,
    ) -> Result<()>;
}

/// Trait for feedback service operations
pub trait FeedbackServiceTrait: Send + Sync {
    fn create_feedback(&self, name: &str, message: &str) -> Result<Feedback>;
    fn get_feedback(&self) -> Result<Vec<Feedback>>;
}
