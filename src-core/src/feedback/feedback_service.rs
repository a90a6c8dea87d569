use std::sync::Arc;

use log::debug;

use crate::constants::{MESSAGE_MAX_CHARS, NAME_MAX_CHARS};
use crate::errors::{Error, Result, ValidationError};
use crate::feedback::feedback_model::{Feedback, NewFeedback};
use crate::feedback::feedback_traits::{FeedbackRepositoryTrait, FeedbackServiceTrait};

pub struct FeedbackService<T: FeedbackRepositoryTrait> {
    feedback_repo: Arc<T>,
}

impl<T: FeedbackRepositoryTrait> FeedbackService<T> {
    pub fn new(feedback_repo: Arc<T>) -> Self {
        FeedbackService { feedback_repo }
    }
}

fn validate_field(field: &str, value: &str, max_chars: usize) -> Result<()> {
    let chars = value.chars().count();
    if chars == 0 {
        return Err(ValidationError::InvalidInput(format!("{} must not be empty", field)).into());
    }
    if chars > max_chars {
        return Err(ValidationError::InvalidInput(format!(
            "{} must be at most {} characters",
            field, max_chars
        ))
        .into());
    }
    Ok(())
}

impl<T: FeedbackRepositoryTrait + Send + Sync> FeedbackServiceTrait for FeedbackService<T> {
    fn create_feedback(&self, name: &str, message: &str) -> Result<Feedback> {
        let name = name.trim();
        let message = message.trim();
        validate_field("name", name, NAME_MAX_CHARS)?;
        validate_field("message", message, MESSAGE_MAX_CHARS)?;

        let inserted = self.feedback_repo.insert_feedback(NewFeedback {
            name: name.to_string(),
            message: message.to_string(),
            created_at: None,
        })?;
        debug!("Inserted feedback {}", inserted.id);

        // Read back through the same listing the API serves. A miss here
        // means the store lost a row it just acknowledged.
        let items = self.feedback_repo.list_feedback()?;
        items
            .into_iter()
            .find(|item| item.id == inserted.id)
            .ok_or_else(|| {
                Error::Unexpected(format!("feedback {} missing after insert", inserted.id))
            })
    }

    fn get_feedback(&self) -> Result<Vec<Feedback>> {
        self.feedback_repo.list_feedback()
    }
}
