use crate::models::{AnswerValue, QuestionId};
use std::collections::BTreeMap;

/// Latest saved answer per question. Entries are overwritten, never removed.
#[derive(Debug, Default, Clone)]
pub struct AnswerStore {
    answers: BTreeMap<QuestionId, AnswerValue>,
}

impl AnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, question_id: &QuestionId, value: AnswerValue) {
        self.answers.insert(question_id.clone(), value);
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &AnswerValue)> {
        self.answers.iter()
    }

    pub fn snapshot(&self) -> BTreeMap<QuestionId, AnswerValue> {
        self.answers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_overwrites() {
        let mut store = AnswerStore::new();
        let id = QuestionId::from("q1");

        store.save(&id, AnswerValue::Single("0".to_string()));
        store.save(&id, AnswerValue::Single("1".to_string()));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id), Some(&AnswerValue::Single("1".to_string())));
    }

    #[test]
    fn test_get_missing() {
        let store = AnswerStore::new();
        assert!(store.get(&QuestionId::from("nope")).is_none());
        assert!(store.is_empty());
    }
}
