use crate::logger;
use crate::models::Submission;
use std::io;

/// External action that finalizes an exam attempt.
pub trait SubmissionTrigger {
    fn submit(&mut self, submission: &Submission) -> io::Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    AlreadySubmitted,
    Failed(String),
}

/// Guards a trigger so it fires at most once per session, whether the
/// request comes from the user or from timer expiry.
#[derive(Debug)]
pub struct Submitter<T: SubmissionTrigger> {
    trigger: T,
    submitted: bool,
}

impl<T: SubmissionTrigger> Submitter<T> {
    pub fn new(trigger: T) -> Self {
        Self {
            trigger,
            submitted: false,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }

    /// A failed attempt still consumes the single submission.
    pub fn submit_once(&mut self, submission: &Submission) -> SubmitOutcome {
        if self.submitted {
            logger::log("Submission already sent, ignoring repeat request");
            return SubmitOutcome::AlreadySubmitted;
        }
        self.submitted = true;

        match self.trigger.submit(submission) {
            Ok(()) => {
                logger::log(&format!(
                    "Submitted exam {} ({:?}, {} answers)",
                    submission.exam_id,
                    submission.reason,
                    submission.answers.len()
                ));
                SubmitOutcome::Submitted
            }
            Err(e) => {
                logger::log(&format!("Submission of exam {} failed: {}", submission.exam_id, e));
                SubmitOutcome::Failed(e.to_string())
            }
        }
    }
}
