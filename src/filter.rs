//! Question-bank table used by the exam-authoring screen: live substring
//! search plus a select-all checkbox.

use crate::models::{ExamSession, QuestionId};

pub trait Searchable {
    fn searchable_columns(&self) -> Vec<&str>;
}

/// Indices of rows whose searchable columns contain `query`, ignoring case.
/// An empty query keeps every row.
pub fn filter<R: Searchable>(query: &str, rows: &[R]) -> Vec<usize> {
    let needle = query.to_lowercase();
    rows.iter()
        .enumerate()
        .filter(|(_, row)| {
            needle.is_empty()
                || row
                    .searchable_columns()
                    .iter()
                    .any(|column| column.to_lowercase().contains(&needle))
        })
        .map(|(i, _)| i)
        .collect()
}

pub fn select_all(checks: &mut [bool], checked: bool) {
    checks.iter_mut().for_each(|c| *c = checked);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankRow {
    pub question_id: QuestionId,
    pub text: String,
    pub topic: String,
    pub type_name: String,
    pub difficulty: String,
}

impl Searchable for BankRow {
    fn searchable_columns(&self) -> Vec<&str> {
        vec![self.text.as_str(), self.topic.as_str()]
    }
}

#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub title: String,
    rows: Vec<BankRow>,
    checked: Vec<bool>,
    query: String,
    visible: Vec<usize>,
    selected: usize,
    all_checked: bool,
}

impl QuestionBank {
    pub fn from_exam(exam: &ExamSession) -> Self {
        let rows: Vec<BankRow> = exam
            .questions
            .iter()
            .map(|q| BankRow {
                question_id: q.id.clone(),
                text: q.text.clone(),
                topic: q.topic.clone().unwrap_or_default(),
                type_name: q.kind.type_name().to_string(),
                difficulty: q.difficulty.clone().unwrap_or_default(),
            })
            .collect();
        let visible = (0..rows.len()).collect();

        Self {
            title: exam.title.clone(),
            checked: vec![false; rows.len()],
            rows,
            query: String::new(),
            visible,
            selected: 0,
            all_checked: false,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn rows(&self) -> &[BankRow] {
        &self.rows
    }

    pub fn visible(&self) -> &[usize] {
        &self.visible
    }

    /// Position within the visible rows.
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_checked(&self, row: usize) -> bool {
        self.checked.get(row).copied().unwrap_or(false)
    }

    pub fn all_checked(&self) -> bool {
        self.all_checked
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.visible = filter(&self.query, &self.rows);
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.visible.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn toggle_selected(&mut self) {
        if let Some(&row) = self.visible.get(self.selected) {
            self.checked[row] = !self.checked[row];
        }
    }

    /// Flips the header checkbox and applies it to every row.
    pub fn toggle_all(&mut self) {
        self.all_checked = !self.all_checked;
        select_all(&mut self.checked, self.all_checked);
    }

    pub fn checked_ids(&self) -> Vec<&QuestionId> {
        self.rows
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(row, _)| &row.question_id)
            .collect()
    }
}
