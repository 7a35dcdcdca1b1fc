/// Error type for survey mutations.
///
/// Every variant is a recoverable validation failure surfaced synchronously
/// to the caller of the mutating operation; none are fatal. The presentation
/// layer is expected to catch each kind and render a corrective message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SurveyError {
    /// An SQD answer that is neither "na" nor a numeral in 1..=5.
    #[error("invalid answer value: {0:?}")]
    InvalidAnswer(String),

    /// A question with this key already exists in the registry.
    #[error("duplicate question key: {0}")]
    DuplicateKey(String),

    /// Update or delete targeting an absent key or id.
    #[error("no record found for: {0}")]
    NotFound(String),

    /// A reorder payload whose key multiset differs from the registry's.
    #[error("reorder payload does not match the existing question set")]
    InvalidPermutation,

    /// A Radio question with an empty choice list.
    #[error("radio question {0} has no choices")]
    MissingChoices(String),
}
