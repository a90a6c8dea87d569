pub mod feedback_model;
pub mod feedback_repository;
pub mod feedback_service;
pub mod feedback_traits;

pub use feedback_model::{Feedback, NewFeedback};
pub use feedback_repository::FeedbackRepository;
pub use feedback_service::FeedbackService;
pub use feedback_traits::{FeedbackRepositoryTrait, FeedbackServiceTrait};
