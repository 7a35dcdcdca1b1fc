//! The log of submitted survey responses.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;

use csm_survey_types::{ResponseDraft, SurveyError, SurveyResponse};

use crate::{ident, score};

/// Submitted responses, most recent first.
///
/// Responses are immutable once stored; the log exposes no update or delete.
#[derive(Debug, Clone, Default)]
pub struct ResponseLog {
    responses: Vec<SurveyResponse>,
}

impl ResponseLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from existing responses in stored (most-recent-first) order.
    pub fn from_responses(responses: Vec<SurveyResponse>) -> Self {
        Self { responses }
    }

    /// Submit a draft response.
    ///
    /// Derives the SQD average, allocates the next id over the existing
    /// response ids, stamps the current time, and inserts the record at the
    /// head of the log. Returns the fully populated record.
    pub fn submit(&mut self, draft: ResponseDraft) -> Result<&SurveyResponse, SurveyError> {
        self.submit_at(draft, now_millis())
    }

    /// [`ResponseLog::submit`] with an explicit timestamp.
    pub fn submit_at(
        &mut self,
        draft: ResponseDraft,
        timestamp: u64,
    ) -> Result<&SurveyResponse, SurveyError> {
        let sqd_avg = score::compute_average(&draft.sqd)?;
        let id = ident::next_id(self.responses.iter().map(|response| response.id));
        tracing::debug!(id, ref_id = %draft.ref_id, sqd_avg, "response submitted");
        let response = SurveyResponse::from_draft(draft, id, sqd_avg, timestamp);
        self.responses.insert(0, response);
        Ok(&self.responses[0])
    }

    /// Responses in stored order, most recent first.
    pub fn responses(&self) -> &[SurveyResponse] {
        &self.responses
    }

    /// Number of stored responses.
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// Check whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Build a correlation reference in the deployed format,
/// e.g. `VZM-CSM-1759662846524-3555`.
///
/// The reference is for display and correlation only; it is distinct from the
/// integer id assigned by the log.
pub fn generate_ref_id() -> String {
    let suffix: u16 = rand::thread_rng().gen_range(1000..10000);
    format!("VZM-CSM-{}-{suffix}", now_millis())
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use csm_survey_types::SQD_COUNT;

    use super::*;

    fn draft(ref_id: &str, sqd: [&str; SQD_COUNT]) -> ResponseDraft {
        ResponseDraft {
            ref_id: ref_id.into(),
            date: "2025-10-05".into(),
            client_type: "Citizen".into(),
            sex: "female".into(),
            age: "28".into(),
            region: "ncr".into(),
            service: "Civil Registry Services".into(),
            service_other: None,
            cc: ["1".into(), "2".into(), "1".into()],
            sqd: sqd.map(str::to_string),
            suggestions: String::new(),
            email: None,
        }
    }

    #[test]
    fn submit_populates_derived_fields() {
        let mut log = ResponseLog::new();
        let response = log
            .submit_at(draft("VZM-CSM-1-0001", ["5"; SQD_COUNT]), 42)
            .unwrap();
        assert_eq!(response.id, 1);
        assert_eq!(response.sqd_avg, 5.0);
        assert_eq!(response.timestamp, 42);
        assert_eq!(response.ref_id, "VZM-CSM-1-0001");
    }

    #[test]
    fn newest_response_first() {
        let mut log = ResponseLog::new();
        log.submit_at(draft("a", ["5"; SQD_COUNT]), 1).unwrap();
        log.submit_at(draft("b", ["4"; SQD_COUNT]), 2).unwrap();
        let refs: Vec<&str> = log
            .responses()
            .iter()
            .map(|response| response.ref_id.as_str())
            .collect();
        assert_eq!(refs, ["b", "a"]);
    }

    #[test]
    fn ids_never_reused_across_submissions() {
        let mut log = ResponseLog::new();
        for index in 0..5 {
            log.submit_at(draft(&format!("r{index}"), ["3"; SQD_COUNT]), index)
                .unwrap();
        }
        let mut ids: Vec<u32> = log.responses().iter().map(|response| response.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn malformed_draft_is_not_stored() {
        let mut log = ResponseLog::new();
        let mut bad = draft("bad", ["5"; SQD_COUNT]);
        bad.sqd[3] = "maybe".into();
        let result = log.submit_at(bad, 1);
        assert_eq!(result.unwrap_err(), SurveyError::InvalidAnswer("maybe".into()));
        assert!(log.is_empty());
    }

    #[test]
    fn ref_id_format() {
        let ref_id = generate_ref_id();
        assert!(ref_id.starts_with("VZM-CSM-"));
        assert_eq!(ref_id.split('-').count(), 4);
    }
}
