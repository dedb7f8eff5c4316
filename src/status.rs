use crate::models::QuestionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub answered: usize,
    pub marked: usize,
    pub unanswered: usize,
}

/// Per-index question status. `Answered` always wins over `Marked`.
#[derive(Debug, Clone)]
pub struct StatusTracker {
    statuses: Vec<QuestionStatus>,
}

impl StatusTracker {
    pub fn new(question_count: usize) -> Self {
        Self {
            statuses: vec![QuestionStatus::Unanswered; question_count],
        }
    }

    pub fn mark_answered(&mut self, index: usize) {
        if let Some(status) = self.statuses.get_mut(index) {
            *status = QuestionStatus::Answered;
        }
    }

    /// Flips between `Marked` and `Unanswered`. Answered questions stay answered.
    pub fn toggle_marked(&mut self, index: usize) {
        if let Some(status) = self.statuses.get_mut(index) {
            *status = match *status {
                QuestionStatus::Answered => QuestionStatus::Answered,
                QuestionStatus::Marked => QuestionStatus::Unanswered,
                QuestionStatus::Unanswered => QuestionStatus::Marked,
            };
        }
    }

    pub fn status_of(&self, index: usize) -> QuestionStatus {
        self.statuses.get(index).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.statuses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statuses.is_empty()
    }

    pub fn as_slice(&self) -> &[QuestionStatus] {
        &self.statuses
    }

    pub fn counts(&self) -> StatusCounts {
        self.statuses
            .iter()
            .fold(StatusCounts::default(), |mut counts, status| {
                match status {
                    QuestionStatus::Answered => counts.answered += 1,
                    QuestionStatus::Marked => counts.marked += 1,
                    QuestionStatus::Unanswered => counts.unanswered += 1,
                }
                counts
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_answered_is_idempotent() {
        let mut tracker = StatusTracker::new(2);
        tracker.mark_answered(0);
        tracker.mark_answered(0);
        assert_eq!(tracker.status_of(0), QuestionStatus::Answered);
        assert_eq!(tracker.status_of(1), QuestionStatus::Unanswered);
    }

    #[test]
    fn test_toggle_marked_alternates() {
        let mut tracker = StatusTracker::new(1);
        tracker.toggle_marked(0);
        assert_eq!(tracker.status_of(0), QuestionStatus::Marked);
        tracker.toggle_marked(0);
        assert_eq!(tracker.status_of(0), QuestionStatus::Unanswered);
        tracker.toggle_marked(0);
        assert_eq!(tracker.status_of(0), QuestionStatus::Marked);
    }

    #[test]
    fn test_toggle_marked_on_answered_is_noop() {
        let mut tracker = StatusTracker::new(1);
        tracker.mark_answered(0);
        tracker.toggle_marked(0);
        assert_eq!(tracker.status_of(0), QuestionStatus::Answered);
    }

    #[test]
    fn test_answered_overrides_marked() {
        let mut tracker = StatusTracker::new(1);
        tracker.toggle_marked(0);
        tracker.mark_answered(0);
        assert_eq!(tracker.status_of(0), QuestionStatus::Answered);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut tracker = StatusTracker::new(1);
        tracker.mark_answered(5);
        tracker.toggle_marked(5);
        assert_eq!(tracker.status_of(5), QuestionStatus::Unanswered);
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn test_counts() {
        let mut tracker = StatusTracker::new(3);
        tracker.mark_answered(0);
        tracker.toggle_marked(1);
        assert_eq!(
            tracker.counts(),
            StatusCounts {
                answered: 1,
                marked: 1,
                unanswered: 1
            }
        );
    }
}
