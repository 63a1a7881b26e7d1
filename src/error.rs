//! Error types shared across the dashboard

use thiserror::Error;

/// Rejected fixture records. Raised while building a [`crate::store::FixtureStore`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FixtureError {
    #[error("review {id}: {stars} stars is outside 0..={max}")]
    InvalidStars { id: String, stars: u8, max: u8 },

    #[error("duplicate id {id:?} in {list}")]
    DuplicateId { list: &'static str, id: String },

    #[error("invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
}

/// Failures of a review moderation backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The backend could not take the decision. The dialog stays open so the
    /// operator can retry.
    #[error("{action} unavailable for review {review_id}: {reason}")]
    ActionUnavailable {
        action: &'static str,
        review_id: String,
        reason: String,
    },
}
