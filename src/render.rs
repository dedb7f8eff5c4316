//! Question markup and answer extraction.
//!
//! Rendering produces a display-independent description of a question's
//! input controls and mounts it into an [`InputSurface`]. Extraction reads
//! the surface back into an [`AnswerValue`]. Neither step touches the
//! answer store or status tracker.

use crate::models::{AnswerValue, Question, QuestionKind};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Exclusive selection within the question.
    Radio,
    /// Independent selection.
    Checkbox,
    TextField,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub id: String,
    pub kind: ControlKind,
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionMarkup {
    pub heading: String,
    pub text: String,
    pub controls: Vec<Control>,
}

/// Ephemeral input widget state the renderer writes into and reads from.
pub trait InputSurface {
    /// Replaces the surface contents, discarding all previous input state.
    fn mount(&mut self, markup: QuestionMarkup);

    /// Values of every checked choice control, in display order.
    fn checked_values(&self) -> Vec<String>;

    /// Content of the text field, or `None` when no text field is mounted.
    fn text_value(&self) -> Option<&str>;

    /// Pre-fills the mounted controls from a previously saved answer.
    fn restore(&mut self, value: &AnswerValue);
}

pub fn render(question: &Question, index: usize, total: usize) -> QuestionMarkup {
    let controls = match &question.kind {
        QuestionKind::SingleChoice { options } => choice_controls(options, ControlKind::Radio),
        QuestionKind::MultiChoice { options } => choice_controls(options, ControlKind::Checkbox),
        QuestionKind::FreeText => vec![Control {
            id: "answer".to_string(),
            kind: ControlKind::TextField,
            value: String::new(),
            label: "Enter your answer".to_string(),
        }],
        QuestionKind::Unsupported { .. } => Vec::new(),
    };

    QuestionMarkup {
        heading: format!("Question {} of {}", index + 1, total),
        text: question.text.clone(),
        controls,
    }
}

fn choice_controls(options: &[String], kind: ControlKind) -> Vec<Control> {
    options
        .iter()
        .enumerate()
        .map(|(i, option)| Control {
            id: format!("option{}", i),
            kind,
            value: i.to_string(),
            label: option.clone(),
        })
        .collect()
}

/// Mounts the question into `surface`.
pub fn render_into<S: InputSurface>(surface: &mut S, question: &Question, index: usize, total: usize) {
    surface.mount(render(question, index, total));
}

/// Reads the user's current input for `question`. `None` means no answer
/// can be derived (nothing selected, or an unsupported question type).
pub fn extract<S: InputSurface>(question: &Question, surface: &S) -> Option<AnswerValue> {
    match &question.kind {
        QuestionKind::SingleChoice { .. } => surface
            .checked_values()
            .into_iter()
            .next()
            .map(AnswerValue::Single),
        QuestionKind::MultiChoice { .. } => Some(AnswerValue::Multi(
            surface.checked_values().into_iter().collect::<BTreeSet<_>>(),
        )),
        QuestionKind::FreeText => surface
            .text_value()
            .map(|text| AnswerValue::Text(text.trim().to_string())),
        QuestionKind::Unsupported { .. } => None,
    }
}
