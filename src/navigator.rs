use crate::answers::AnswerStore;
use crate::logger;
use crate::models::{AnswerValue, ExamSession, Question, QuestionStatus};
use crate::render::{self, InputSurface};
use crate::status::StatusTracker;

/// Visual state of one navigation-panel button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavCell {
    pub index: usize,
    pub current: bool,
    pub status: QuestionStatus,
}

/// Owns the position within the exam and is the only writer of the answer
/// store and status tracker.
///
/// Every transition saves the outgoing answer, moves, re-renders, then
/// refreshes the navigation panel, in that order.
#[derive(Debug)]
pub struct Navigator<S: InputSurface> {
    exam: ExamSession,
    current_index: usize,
    answers: AnswerStore,
    statuses: StatusTracker,
    surface: S,
    nav_panel: Vec<NavCell>,
    restore_answers: bool,
}

impl<S: InputSurface> Navigator<S> {
    pub fn new(exam: ExamSession, surface: S, restore_answers: bool) -> Self {
        let statuses = StatusTracker::new(exam.len());
        let mut navigator = Self {
            exam,
            current_index: 0,
            answers: AnswerStore::new(),
            statuses,
            surface,
            nav_panel: Vec::new(),
            restore_answers,
        };
        navigator.render_current();
        navigator.refresh_nav_panel();
        navigator
    }

    pub fn exam(&self) -> &ExamSession {
        &self.exam
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.exam.questions.get(self.current_index)
    }

    pub fn answers(&self) -> &AnswerStore {
        &self.answers
    }

    pub fn statuses(&self) -> &StatusTracker {
        &self.statuses
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn nav_panel(&self) -> &[NavCell] {
        &self.nav_panel
    }

    pub fn next(&mut self) -> bool {
        if self.current_index + 1 >= self.exam.len() {
            return false;
        }
        self.transition(self.current_index + 1);
        true
    }

    pub fn prev(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.transition(self.current_index - 1);
        true
    }

    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.exam.len() {
            logger::log(&format!("Ignoring jump to out-of-range question {}", index));
            return false;
        }
        self.transition(index);
        true
    }

    /// Saves the current question's input if it holds an answer. Returns
    /// the saved value.
    pub fn save_current(&mut self) -> Option<AnswerValue> {
        let question = self.exam.questions.get(self.current_index)?;
        let value = render::extract(question, &self.surface).filter(AnswerValue::is_present)?;

        logger::log(&format!(
            "Saving answer for question {} (id {})",
            self.current_index + 1,
            question.id
        ));
        self.answers.save(&question.id, value.clone());
        self.statuses.mark_answered(self.current_index);
        Some(value)
    }

    pub fn toggle_marked(&mut self) {
        self.statuses.toggle_marked(self.current_index);
        logger::log(&format!(
            "Question {} review status is now {:?}",
            self.current_index + 1,
            self.statuses.status_of(self.current_index)
        ));
        self.refresh_nav_panel();
    }

    fn transition(&mut self, target: usize) {
        self.save_current();
        logger::log(&format!(
            "Navigating from question {} to {}",
            self.current_index + 1,
            target + 1
        ));
        self.current_index = target;
        self.render_current();
        self.refresh_nav_panel();
    }

    fn render_current(&mut self) {
        let total = self.exam.len();
        let Some(question) = self.exam.questions.get(self.current_index) else {
            return;
        };
        render::render_into(&mut self.surface, question, self.current_index, total);

        if self.restore_answers
            && let Some(saved) = self.answers.get(&question.id)
        {
            self.surface.restore(saved);
        }
    }

    fn refresh_nav_panel(&mut self) {
        self.nav_panel = (0..self.exam.len())
            .map(|index| NavCell {
                index,
                current: index == self.current_index,
                status: self.statuses.status_of(index),
            })
            .collect();
    }
}
