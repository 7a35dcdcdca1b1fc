//! Stock fixtures shipped with the deployed questionnaire: the nine SQD
//! Likert questions, the three CC Radio questions, three sample responses,
//! and the initial user accounts.

use csm_survey_types::{Category, Question, QuestionKind, SurveyResponse, User};

/// The stock ARTA questionnaire, in presentation order.
pub fn questions() -> Vec<Question> {
    vec![
        Question::new(
            "sqd0",
            "I am satisfied with the service that I availed.",
            QuestionKind::Likert,
            Category::Sqd,
            1,
        ),
        Question::new(
            "sqd1",
            "I spent a reasonable amount of time for my transaction.",
            QuestionKind::Likert,
            Category::Sqd,
            2,
        ),
        Question::new(
            "sqd2",
            "The office followed the transaction's requirements and steps based on the \
             information provided.",
            QuestionKind::Likert,
            Category::Sqd,
            3,
        ),
        Question::new(
            "sqd3",
            "The steps (including payment) I needed to do for my transaction were easy and \
             simple.",
            QuestionKind::Likert,
            Category::Sqd,
            4,
        ),
        Question::new(
            "sqd4",
            "I easily found information about my transaction from the office or its website.",
            QuestionKind::Likert,
            Category::Sqd,
            5,
        ),
        Question::new(
            "sqd5",
            "I paid a reasonable amount of fees for my transaction. (If service was free, mark \
             the 'N/A' column.)",
            QuestionKind::Likert,
            Category::Sqd,
            6,
        ),
        Question::new(
            "sqd6",
            "I feel the office was fair to everyone, or \"walang palakasan\", during my \
             transaction.",
            QuestionKind::Likert,
            Category::Sqd,
            7,
        ),
        Question::new(
            "sqd7",
            "I was treated courteously by the staff, and (if asked for help) the staff was \
             helpful.",
            QuestionKind::Likert,
            Category::Sqd,
            8,
        ),
        Question::new(
            "sqd8",
            "I got what I needed from the government office, or (if denied) denial of request \
             was sufficiently explained to me.",
            QuestionKind::Likert,
            Category::Sqd,
            9,
        ),
        Question::new(
            "cc1",
            "Which of the following best describes your awareness of a Citizen's Charter?",
            QuestionKind::radio([
                "1. I know what a CC is and I saw this office's CC.",
                "2. I know what a CC is but I did NOT see this office's CC.",
                "3. I learned of the CC only when I saw this office's CC.",
                "4. I do not know what a CC is and I did not see one in this office.",
            ]),
            Category::Cc,
            10,
        ),
        Question::new(
            "cc2",
            "If aware of CC, would you say that the CC of this office was...?",
            QuestionKind::radio([
                "1. Easy to see",
                "2. Somewhat easy to see",
                "3. Difficult to see",
                "4. Not visible at all",
                "5. N/A",
            ]),
            Category::Cc,
            11,
        ),
        Question::new(
            "cc3",
            "If aware of CC (answered 1-3 in CC1), how much did the CC help you in your \
             transaction?",
            QuestionKind::radio([
                "1. Helped very much",
                "2. Somewhat helped",
                "3. Did not help",
                "4. N/A",
            ]),
            Category::Cc,
            12,
        ),
    ]
}

/// Three sample responses, most recent first, as shipped with the deployment.
///
/// The stored `sqd_avg` values (4.8, 4.5, 4.7) are the fixture's rounded
/// display values, kept verbatim.
pub fn responses() -> Vec<SurveyResponse> {
    vec![
        SurveyResponse {
            id: 1,
            ref_id: "VZM-CSM-1759662846524-3555".into(),
            date: "2025-10-05".into(),
            client_type: "Business".into(),
            sex: "male".into(),
            age: "35".into(),
            region: "ncr".into(),
            service: "Business Permit".into(),
            service_other: None,
            cc: ["1".into(), "1".into(), "1".into()],
            sqd: [
                "5".into(),
                "5".into(),
                "5".into(),
                "4".into(),
                "5".into(),
                "5".into(),
                "5".into(),
                "5".into(),
                "4".into(),
            ],
            sqd_avg: 4.8,
            suggestions: "Very efficient service!".into(),
            email: Some("test@example.com".into()),
            timestamp: 1_759_662_846_524,
        },
        SurveyResponse {
            id: 2,
            ref_id: "VZM-CSM-1759662846524-3556".into(),
            date: "2025-10-05".into(),
            client_type: "Citizen".into(),
            sex: "female".into(),
            age: "28".into(),
            region: "ncr".into(),
            service: "Civil Registry Services".into(),
            service_other: None,
            cc: ["2".into(), "2".into(), "2".into()],
            sqd: [
                "5".into(),
                "4".into(),
                "5".into(),
                "4".into(),
                "4".into(),
                "na".into(),
                "5".into(),
                "5".into(),
                "4".into(),
            ],
            sqd_avg: 4.5,
            suggestions: "Good but can improve waiting time".into(),
            email: None,
            timestamp: 1_759_662_846_524,
        },
        SurveyResponse {
            id: 3,
            ref_id: "VZM-CSM-1759662846524-3557".into(),
            date: "2025-10-05".into(),
            client_type: "Business".into(),
            sex: "male".into(),
            age: "42".into(),
            region: "region3".into(),
            service: "Building Permit".into(),
            service_other: None,
            cc: ["1".into(), "1".into(), "1".into()],
            sqd: [
                "5".into(),
                "5".into(),
                "5".into(),
                "4".into(),
                "5".into(),
                "4".into(),
                "5".into(),
                "5".into(),
                "5".into(),
            ],
            sqd_avg: 4.7,
            suggestions: "Staff very helpful".into(),
            email: Some("builder@test.com".into()),
            timestamp: 1_759_662_846_524,
        },
    ]
}

/// The initial administrative accounts.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Admin User".into(),
            email: "admin@valenzuela.gov.ph".into(),
            role: "Admin".into(),
            status: "Active".into(),
        },
        User {
            id: 2,
            name: "Staff Member".into(),
            email: "staff@valenzuela.gov.ph".into(),
            role: "Staff".into(),
            status: "Active".into(),
        },
        User {
            id: 3,
            name: "Enumerator".into(),
            email: "enumerator@valenzuela.gov.ph".into(),
            role: "Enumerator".into(),
            status: "Active".into(),
        },
    ]
}
