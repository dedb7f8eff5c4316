use crate::models::AnswerValue;
use crate::render::{ControlKind, InputSurface, QuestionMarkup};

/// Terminal-side input surface for the question panel.
///
/// Holds which choice controls are checked, which one has keyboard focus,
/// and the free-text buffer with its cursor (a byte offset kept on a char
/// boundary).
#[derive(Debug, Default, Clone)]
pub struct PanelInput {
    markup: QuestionMarkup,
    checked: Vec<bool>,
    focus: usize,
    text: String,
    cursor: usize,
    pub scroll_y: u16,
}

impl PanelInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn markup(&self) -> &QuestionMarkup {
        &self.markup
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_text_field(&self) -> bool {
        self.markup
            .controls
            .iter()
            .any(|c| c.kind == ControlKind::TextField)
    }

    fn choice_count(&self) -> usize {
        self.markup
            .controls
            .iter()
            .filter(|c| c.kind != ControlKind::TextField)
            .count()
    }

    pub fn focus_next(&mut self) {
        if self.focus + 1 < self.choice_count() {
            self.focus += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn toggle_focused(&mut self) {
        self.select_option(self.focus);
    }

    /// Radio controls behave like a radio group: selecting one clears the
    /// others and re-selecting keeps it checked. Checkboxes flip.
    pub fn select_option(&mut self, index: usize) {
        let Some(control) = self.markup.controls.get(index) else {
            return;
        };
        match control.kind {
            ControlKind::Radio => {
                for (i, checked) in self.checked.iter_mut().enumerate() {
                    *checked = i == index;
                }
            }
            ControlKind::Checkbox => {
                self.checked[index] = !self.checked[index];
            }
            ControlKind::TextField => return,
        }
        self.focus = index;
    }

    pub fn insert_char(&mut self, c: char) {
        if !self.has_text_field() {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.min(self.text.len());
        if let Some(prev) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn cursor_right(&mut self) {
        if let Some(next) = self.text[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }
}

impl InputSurface for PanelInput {
    fn mount(&mut self, markup: QuestionMarkup) {
        self.checked = vec![false; markup.controls.len()];
        self.markup = markup;
        self.focus = 0;
        self.text.clear();
        self.cursor = 0;
        self.scroll_y = 0;
    }

    fn checked_values(&self) -> Vec<String> {
        self.markup
            .controls
            .iter()
            .zip(&self.checked)
            .filter(|(control, checked)| **checked && control.kind != ControlKind::TextField)
            .map(|(control, _)| control.value.clone())
            .collect()
    }

    fn text_value(&self) -> Option<&str> {
        self.has_text_field().then_some(self.text.as_str())
    }

    fn restore(&mut self, value: &AnswerValue) {
        match value {
            AnswerValue::Single(selected) => {
                if let Some(i) = self.markup.controls.iter().position(|c| &c.value == selected) {
                    self.select_option(i);
                }
            }
            AnswerValue::Multi(selected) => {
                for (control, checked) in self.markup.controls.iter().zip(self.checked.iter_mut()) {
                    *checked = selected.contains(&control.value);
                }
            }
            AnswerValue::Text(text) => {
                if self.has_text_field() {
                    self.text = text.clone();
                    self.cursor = self.text.len();
                }
            }
        }
    }
}
