use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Opaque question identifier. Exam files may carry numeric or string ids;
/// both are normalised to a string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl<'de> Deserialize<'de> for QuestionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Num(serde_json::Number),
            Text(String),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Num(n) => QuestionId(n.to_string()),
            RawId::Text(s) => QuestionId(s),
        })
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        QuestionId(value.to_string())
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    SingleChoice { options: Vec<String> },
    MultiChoice { options: Vec<String> },
    FreeText,
    /// Any type tag this client cannot render (essay, comprehension, ...).
    Unsupported { type_name: String },
}

impl QuestionKind {
    pub fn type_name(&self) -> &str {
        match self {
            QuestionKind::SingleChoice { .. } => "mcq_single",
            QuestionKind::MultiChoice { .. } => "mcq_multiple",
            QuestionKind::FreeText => "short_answer",
            QuestionKind::Unsupported { type_name } => type_name,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            QuestionKind::SingleChoice { options } | QuestionKind::MultiChoice { options } => {
                options
            }
            QuestionKind::FreeText | QuestionKind::Unsupported { .. } => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub kind: QuestionKind,
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub difficulty: Option<String>,
    pub max_score: Option<u32>,
}

#[derive(Deserialize)]
struct RawQuestion {
    id: QuestionId,
    text: String,
    #[serde(rename = "type", alias = "question_type")]
    type_name: String,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    topic: Option<String>,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default)]
    max_score: Option<u32>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let kind = match raw.type_name.as_str() {
            "mcq_single" => QuestionKind::SingleChoice {
                options: raw.options.unwrap_or_default(),
            },
            "mcq_multiple" => QuestionKind::MultiChoice {
                options: raw.options.unwrap_or_default(),
            },
            "short_answer" => QuestionKind::FreeText,
            other => QuestionKind::Unsupported {
                type_name: other.to_string(),
            },
        };

        Question {
            id: raw.id,
            text: raw.text,
            kind,
            subject: raw.subject,
            topic: raw.topic,
            difficulty: raw.difficulty,
            max_score: raw.max_score,
        }
    }
}

impl Question {
    pub fn new(id: &str, text: &str, kind: QuestionKind) -> Self {
        Question {
            id: QuestionId::from(id),
            text: text.to_string(),
            kind,
            subject: None,
            topic: None,
            difficulty: None,
            max_score: None,
        }
    }
}

/// Immutable exam definition supplied by the hosting collaborator.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamSession {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subject: Option<String>,
    pub duration_minutes: u32,
    pub questions: Vec<Question>,
}

impl ExamSession {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(BTreeSet<String>),
    Text(String),
}

impl AnswerValue {
    /// Whether this value counts as an answer: a selected option, a
    /// non-empty selection, or non-blank text.
    pub fn is_present(&self) -> bool {
        match self {
            AnswerValue::Single(_) => true,
            AnswerValue::Multi(values) => !values.is_empty(),
            AnswerValue::Text(text) => !text.is_empty(),
        }
    }

    pub fn display(&self) -> String {
        match self {
            AnswerValue::Single(value) => format!("option {}", value),
            AnswerValue::Multi(values) => {
                let joined: Vec<&str> = values.iter().map(String::as_str).collect();
                format!("options {}", joined.join(", "))
            }
            AnswerValue::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionStatus {
    #[default]
    Unanswered,
    Answered,
    Marked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitReason {
    Manual,
    TimeExpired,
}

/// Finalized attempt handed to the submission collaborator.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub exam_id: String,
    pub exam_title: String,
    pub started_at: String,
    pub submitted_at: String,
    pub reason: SubmitReason,
    pub answers: BTreeMap<QuestionId, AnswerValue>,
    pub statuses: Vec<QuestionStatus>,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Exam,
    SubmitConfirm,
    Summary,
    Bank,
}
