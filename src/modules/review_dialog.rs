//! Review approval dialog
//!
//! A two-state machine: `Closed` or `Open` with a snapshot of the review under
//! moderation. Transitions are total; unknown ids and events that make no
//! sense in the current state leave it unchanged.

use crate::domain::Review;

/// Events accepted by the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogEvent {
    SelectReview(String),
    Approve,
    Deny,
    Dismiss,
}

/// Signal raised when a decision closes the dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Approved,
    Denied,
}

impl Acknowledgment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Acknowledgment::Approved => "approved",
            Acknowledgment::Denied => "denied",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ReviewDialog {
    #[default]
    Closed,
    /// Holds its own copy; the fixture entry is never touched.
    Open(Review),
}

impl ReviewDialog {
    pub fn is_open(&self) -> bool {
        matches!(self, ReviewDialog::Open(_))
    }

    pub fn review(&self) -> Option<&Review> {
        match self {
            ReviewDialog::Open(review) => Some(review),
            ReviewDialog::Closed => None,
        }
    }

    /// Next state for `event`, looking selected ids up in `reviews`.
    pub fn transition(
        self,
        event: &DialogEvent,
        reviews: &[Review],
    ) -> (ReviewDialog, Option<Acknowledgment>) {
        match (self, event) {
            (current, DialogEvent::SelectReview(id)) => {
                match reviews.iter().find(|review| review.id() == id.as_str()) {
                    Some(review) => (ReviewDialog::Open(review.clone()), None),
                    None => (current, None),
                }
            }
            (ReviewDialog::Open(_), DialogEvent::Approve) => {
                (ReviewDialog::Closed, Some(Acknowledgment::Approved))
            }
            (ReviewDialog::Open(_), DialogEvent::Deny) => {
                (ReviewDialog::Closed, Some(Acknowledgment::Denied))
            }
            (ReviewDialog::Open(_), DialogEvent::Dismiss) => (ReviewDialog::Closed, None),
            (ReviewDialog::Closed, _) => (ReviewDialog::Closed, None),
        }
    }

    /// In-place form of [`ReviewDialog::transition`].
    pub fn apply(&mut self, event: &DialogEvent, reviews: &[Review]) -> Option<Acknowledgment> {
        let (next, ack) = std::mem::take(self).transition(event, reviews);
        *self = next;
        ack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reviews() -> Vec<Review> {
        vec![
            Review::new("111", "Tent", "Amazing tent", 4).unwrap(),
            Review::new("222", "Hiking Shoes", "Not great", 2).unwrap(),
        ]
    }

    #[test]
    fn test_select_opens_with_copy() {
        let reviews = reviews();
        let mut dialog = ReviewDialog::default();
        let ack = dialog.apply(&DialogEvent::SelectReview("222".into()), &reviews);
        assert_eq!(ack, None);
        assert_eq!(dialog.review(), Some(&reviews[1]));
    }

    #[test]
    fn test_decisions_close_with_acknowledgment() {
        let reviews = reviews();
        for (event, expected) in [
            (DialogEvent::Approve, Acknowledgment::Approved),
            (DialogEvent::Deny, Acknowledgment::Denied),
        ] {
            let mut dialog = ReviewDialog::Open(reviews[0].clone());
            assert_eq!(dialog.apply(&event, &reviews), Some(expected));
            assert_eq!(dialog, ReviewDialog::Closed);
        }
    }

    #[test]
    fn test_dismiss_closes_silently() {
        let reviews = reviews();
        let mut dialog = ReviewDialog::Open(reviews[0].clone());
        assert_eq!(dialog.apply(&DialogEvent::Dismiss, &reviews), None);
        assert!(!dialog.is_open());
    }

    #[test]
    fn test_closed_ignores_decisions() {
        let reviews = reviews();
        let mut dialog = ReviewDialog::Closed;
        for event in [DialogEvent::Dismiss, DialogEvent::Approve, DialogEvent::Deny] {
            assert_eq!(dialog.apply(&event, &reviews), None);
            assert_eq!(dialog, ReviewDialog::Closed);
        }
    }

    #[test]
    fn test_unknown_id_keeps_state() {
        let reviews = reviews();
        let mut dialog = ReviewDialog::Open(reviews[1].clone());
        dialog.apply(&DialogEvent::SelectReview("999".into()), &reviews);
        assert_eq!(dialog.review().map(Review::id), Some("222"));

        let mut closed = ReviewDialog::Closed;
        closed.apply(&DialogEvent::SelectReview("999".into()), &reviews);
        assert_eq!(closed, ReviewDialog::Closed);
    }

    #[test]
    fn test_reselect_replaces_snapshot() {
        let reviews = reviews();
        let mut dialog = ReviewDialog::Open(reviews[0].clone());
        dialog.apply(&DialogEvent::SelectReview("222".into()), &reviews);
        assert_eq!(dialog.review().map(Review::product), Some("Hiking Shoes"));
    }

    #[test]
    fn test_acknowledgment_labels() {
        assert_eq!(Acknowledgment::Approved.as_str(), "approved");
        assert_eq!(Acknowledgment::Denied.as_str(), "denied");
    }
}
