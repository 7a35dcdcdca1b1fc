//! Core types for the csm-survey crate.
//!
//! This crate provides the presentation-agnostic records of the survey:
//! - `Question`, `QuestionKind`, `QuestionKey` - the questionnaire entries
//! - `ResponseDraft` and `SurveyResponse` - submitted responses
//! - `SqdAnswer` - a parsed Service Quality Dimension answer
//! - `User` - administrative user records
//! - `SurveyError` - the validation error taxonomy

mod question;
pub use question::{Category, Question, QuestionKey, QuestionKind, QuestionUpdate};

mod response;
pub use response::{
    CC_COUNT, NOT_APPLICABLE, ResponseDraft, SQD_COUNT, SqdAnswer, SurveyResponse,
};

mod user;
pub use user::{User, UserUpdate};

mod error;
pub use error::SurveyError;
