use std::fmt;

use serde::{Deserialize, Serialize};

use crate::SurveyError;

/// A stable key identifying a question within the registry, e.g. `sqd0` or `cc1`.
///
/// Keys are unique within the registry and immutable once a question is created.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionKey(String);

impl QuestionKey {
    /// Create a new key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// The questionnaire section a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Citizen's Charter awareness questions.
    #[serde(rename = "CC")]
    Cc,

    /// Service Quality Dimension questions, Likert-scored and averaged.
    #[serde(rename = "SQD")]
    Sqd,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cc => write!(f, "CC"),
            Self::Sqd => write!(f, "SQD"),
        }
    }
}

/// The input type of a question, determining how it is answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum QuestionKind {
    /// Five-point agreement scale, plus an N/A column.
    Likert,

    /// Single choice from a fixed, ordered list of labels.
    Radio {
        /// The choice labels, in presentation order. Must not be empty.
        choices: Vec<String>,
    },

    /// Free-text input.
    Text,
}

impl QuestionKind {
    /// Create a Radio kind from anything yielding labels.
    pub fn radio<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Radio {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    /// Check the Radio-choices invariant for the question `key`.
    pub fn validate(&self, key: &QuestionKey) -> Result<(), SurveyError> {
        match self {
            Self::Radio { choices } if choices.is_empty() => {
                Err(SurveyError::MissingChoices(key.to_string()))
            }
            _ => Ok(()),
        }
    }
}

/// A single question in the survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable unique key, immutable once created.
    pub key: QuestionKey,

    /// The prompt text shown to the respondent.
    pub text: String,

    /// The input type (and choices, for Radio questions).
    pub kind: QuestionKind,

    /// Whether an answer is mandatory.
    pub required: bool,

    /// Questionnaire section.
    pub category: Category,

    /// Presentation order. Reassigned 1..N by a registry reorder.
    pub order: u32,
}

impl Question {
    /// Create a new required question.
    pub fn new(
        key: impl Into<QuestionKey>,
        text: impl Into<String>,
        kind: QuestionKind,
        category: Category,
        order: u32,
    ) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
            kind,
            required: true,
            category,
            order,
        }
    }

    /// Mark the question as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// Partial-field patch for an existing question.
///
/// The key is immutable, and `order` is deliberately absent: only a registry
/// reorder may change relative order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionUpdate {
    pub text: Option<String>,
    pub kind: Option<QuestionKind>,
    pub required: Option<bool>,
    pub category: Option<Category>,
}

impl QuestionUpdate {
    /// Create an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the input type.
    pub fn with_kind(mut self, kind: QuestionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the required flag.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Merge the set fields into `question`.
    pub fn apply_to(&self, question: &mut Question) {
        if let Some(text) = &self.text {
            question.text = text.clone();
        }
        if let Some(kind) = &self.kind {
            question.kind = kind.clone();
        }
        if let Some(required) = self.required {
            question.required = required;
        }
        if let Some(category) = self.category {
            question.category = category;
        }
    }
}
