use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::SurveyError;

/// The sentinel value marking a Service Quality Dimension as not applicable.
pub const NOT_APPLICABLE: &str = "na";

/// Number of Citizen's Charter answers on a response.
pub const CC_COUNT: usize = 3;

/// Number of Service Quality Dimension answers on a response.
pub const SQD_COUNT: usize = 9;

/// A parsed Service Quality Dimension answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqdAnswer {
    /// Agreement rating from 1 (strongly disagree) to 5 (strongly agree).
    Rating(u8),

    /// The "na" sentinel: the dimension did not apply to this transaction.
    NotApplicable,
}

impl SqdAnswer {
    /// The numeric rating, or `None` for "na".
    pub fn rating(&self) -> Option<u8> {
        match self {
            Self::Rating(rating) => Some(*rating),
            Self::NotApplicable => None,
        }
    }
}

impl FromStr for SqdAnswer {
    type Err = SurveyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == NOT_APPLICABLE {
            return Ok(Self::NotApplicable);
        }
        match s.parse::<u8>() {
            Ok(rating @ 1..=5) => Ok(Self::Rating(rating)),
            _ => Err(SurveyError::InvalidAnswer(s.to_string())),
        }
    }
}

/// The caller-supplied portion of a survey response.
///
/// `id`, `timestamp`, and `sqd_avg` are deliberately absent: the response log
/// assigns them on submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDraft {
    /// Externally-visible correlation string, e.g. `VZM-CSM-1759662846524-3555`.
    pub ref_id: String,

    /// Submission date as entered on the form (`YYYY-MM-DD`).
    pub date: String,

    /// Demographics.
    pub client_type: String,
    pub sex: String,
    pub age: String,
    pub region: String,

    /// The service availed.
    pub service: String,

    /// Free-text qualifier when the service is not in the fixed list.
    pub service_other: Option<String>,

    /// Citizen's Charter answers, string-encoded choice indices.
    pub cc: [String; CC_COUNT],

    /// Service Quality Dimension answers: `"1"`..`"5"` or `"na"`.
    pub sqd: [String; SQD_COUNT],

    /// Free-text suggestions.
    pub suggestions: String,

    /// Optional contact email.
    pub email: Option<String>,
}

/// A submitted survey response. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    /// Auto-assigned positive integer id, distinct from `ref_id`.
    pub id: u32,

    /// Externally-visible correlation string.
    pub ref_id: String,

    /// Submission date as entered on the form.
    pub date: String,

    pub client_type: String,
    pub sex: String,
    pub age: String,
    pub region: String,

    pub service: String,
    pub service_other: Option<String>,

    pub cc: [String; CC_COUNT],
    pub sqd: [String; SQD_COUNT],

    /// Mean of the numeric SQD answers with "na" excluded from sum and count;
    /// 0.0 when all nine are "na".
    pub sqd_avg: f64,

    pub suggestions: String,
    pub email: Option<String>,

    /// Milliseconds since the Unix epoch at submission.
    pub timestamp: u64,
}

impl SurveyResponse {
    /// Assemble a full record from a draft plus the engine-assigned fields.
    pub fn from_draft(draft: ResponseDraft, id: u32, sqd_avg: f64, timestamp: u64) -> Self {
        Self {
            id,
            ref_id: draft.ref_id,
            date: draft.date,
            client_type: draft.client_type,
            sex: draft.sex,
            age: draft.age,
            region: draft.region,
            service: draft.service,
            service_other: draft.service_other,
            cc: draft.cc,
            sqd: draft.sqd,
            sqd_avg,
            suggestions: draft.suggestions,
            email: draft.email,
            timestamp,
        }
    }
}
