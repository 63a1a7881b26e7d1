//! Moderation backends for review decisions

use tracing::info;

use crate::domain::Review;
use crate::error::ActionError;
use crate::modules::review_dialog::Acknowledgment;

/// Where approve/deny decisions are delivered.
pub trait ReviewBackend {
    fn submit(&mut self, review: &Review, decision: Acknowledgment) -> Result<(), ActionError>;
}

/// Accepts every decision and only records it in the log. There is no
/// review service behind the dashboard yet.
#[derive(Debug, Default)]
pub struct AcknowledgeOnly {
    submitted: usize,
}

impl AcknowledgeOnly {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submitted(&self) -> usize {
        self.submitted
    }
}

impl ReviewBackend for AcknowledgeOnly {
    fn submit(&mut self, review: &Review, decision: Acknowledgment) -> Result<(), ActionError> {
        self.submitted += 1;
        info!(
            review_id = review.id(),
            product = review.product(),
            decision = decision.as_str(),
            "review decision acknowledged"
        );
        Ok(())
    }
}
