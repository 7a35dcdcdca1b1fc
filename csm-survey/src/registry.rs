//! The ordered set of survey questions.

use csm_survey_types::{Question, QuestionKey, QuestionUpdate, SurveyError};

/// Holds the questionnaire and preserves its ordering invariants.
///
/// Questions are always exposed sorted by `order` ascending, and no two
/// questions share a key. [`QuestionRegistry::reorder`] is the only operation
/// that changes relative order.
#[derive(Debug, Clone, Default)]
pub struct QuestionRegistry {
    /// Kept sorted by `order` ascending.
    questions: Vec<Question>,
}

impl QuestionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from existing questions, sorting them by `order`.
    pub fn from_questions(mut questions: Vec<Question>) -> Self {
        questions.sort_by_key(|question| question.order);
        Self { questions }
    }

    /// Add a question.
    ///
    /// Fails with [`SurveyError::DuplicateKey`] if the key already exists and
    /// [`SurveyError::MissingChoices`] for a Radio question without choices.
    pub fn add(&mut self, question: Question) -> Result<(), SurveyError> {
        question.kind.validate(&question.key)?;
        if self.get(&question.key).is_some() {
            return Err(SurveyError::DuplicateKey(question.key.to_string()));
        }
        self.questions.push(question);
        self.questions.sort_by_key(|question| question.order);
        Ok(())
    }

    /// Merge a partial-field patch into the question at `key`.
    ///
    /// Fails with [`SurveyError::NotFound`] if the key is absent, leaving the
    /// registry unchanged. The key itself is immutable.
    pub fn update(&mut self, key: &QuestionKey, update: QuestionUpdate) -> Result<(), SurveyError> {
        // Validate the incoming kind first so a rejected patch mutates nothing.
        if let Some(kind) = &update.kind {
            kind.validate(key)?;
        }
        let question = self
            .questions
            .iter_mut()
            .find(|question| &question.key == key)
            .ok_or_else(|| SurveyError::NotFound(key.to_string()))?;
        update.apply_to(question);
        Ok(())
    }

    /// Remove the question at `key`. Removing an absent key is a no-op.
    pub fn delete(&mut self, key: &QuestionKey) {
        self.questions.retain(|question| &question.key != key);
    }

    /// Replace the whole ordering with the supplied key sequence.
    ///
    /// The payload must be a permutation of the current key set, otherwise
    /// the operation fails with [`SurveyError::InvalidPermutation`] and the
    /// registry is unchanged. On success, `order` values are reassigned 1..N
    /// following the payload.
    pub fn reorder(&mut self, keys: Vec<QuestionKey>) -> Result<(), SurveyError> {
        let mut current: Vec<&QuestionKey> =
            self.questions.iter().map(|question| &question.key).collect();
        let mut supplied: Vec<&QuestionKey> = keys.iter().collect();
        current.sort();
        supplied.sort();
        if current != supplied {
            return Err(SurveyError::InvalidPermutation);
        }

        let mut remaining = std::mem::take(&mut self.questions);
        for (index, key) in keys.iter().enumerate() {
            if let Some(position) = remaining.iter().position(|question| &question.key == key) {
                let mut question = remaining.swap_remove(position);
                question.order = index as u32 + 1;
                self.questions.push(question);
            }
        }
        Ok(())
    }

    /// Questions sorted by `order` ascending.
    pub fn ordered(&self) -> &[Question] {
        &self.questions
    }

    /// Look up a question by key.
    pub fn get(&self, key: &QuestionKey) -> Option<&Question> {
        self.questions.iter().find(|question| &question.key == key)
    }

    /// Keys in current presentation order.
    pub fn keys(&self) -> impl Iterator<Item = &QuestionKey> {
        self.questions.iter().map(|question| &question.key)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use csm_survey_types::{Category, QuestionKind};

    use super::*;

    fn likert(key: &str, order: u32) -> Question {
        Question::new(key, format!("{key} text"), QuestionKind::Likert, Category::Sqd, order)
    }

    fn registry() -> QuestionRegistry {
        QuestionRegistry::from_questions(vec![
            likert("sqd0", 1),
            likert("sqd1", 2),
            likert("sqd2", 3),
        ])
    }

    #[test]
    fn add_rejects_duplicate_key() {
        let mut registry = registry();
        let result = registry.add(likert("sqd1", 4));
        assert_eq!(result, Err(SurveyError::DuplicateKey("sqd1".into())));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn add_rejects_radio_without_choices() {
        let mut registry = registry();
        let question = Question::new(
            "cc1",
            "Awareness",
            QuestionKind::Radio { choices: vec![] },
            Category::Cc,
            4,
        );
        let result = registry.add(question);
        assert_eq!(result, Err(SurveyError::MissingChoices("cc1".into())));
    }

    #[test]
    fn exposed_sorted_by_order() {
        let mut registry = registry();
        registry.add(likert("sqd9", 0)).unwrap();
        let keys: Vec<&str> = registry.keys().map(QuestionKey::as_str).collect();
        assert_eq!(keys, ["sqd9", "sqd0", "sqd1", "sqd2"]);
    }

    #[test]
    fn update_missing_key_leaves_registry_unchanged() {
        let mut registry = registry();
        let before = registry.ordered().to_vec();
        let result = registry.update(
            &QuestionKey::new("ghost"),
            QuestionUpdate::new().with_text("nope"),
        );
        assert_eq!(result, Err(SurveyError::NotFound("ghost".into())));
        assert_eq!(registry.ordered(), before);
    }

    #[test]
    fn update_merges_fields() {
        let mut registry = registry();
        registry
            .update(
                &QuestionKey::new("sqd1"),
                QuestionUpdate::new().with_text("Revised").with_required(false),
            )
            .unwrap();
        let question = registry.get(&QuestionKey::new("sqd1")).unwrap();
        assert_eq!(question.text, "Revised");
        assert!(!question.required);
    }

    #[test]
    fn update_rejecting_empty_radio_mutates_nothing() {
        let mut registry = registry();
        let before = registry.ordered().to_vec();
        let result = registry.update(
            &QuestionKey::new("sqd1"),
            QuestionUpdate::new().with_kind(QuestionKind::Radio { choices: vec![] }),
        );
        assert_eq!(result, Err(SurveyError::MissingChoices("sqd1".into())));
        assert_eq!(registry.ordered(), before);
    }

    #[test]
    fn delete_is_idempotent() {
        let mut registry = registry();
        registry.delete(&QuestionKey::new("sqd1"));
        assert_eq!(registry.len(), 2);
        registry.delete(&QuestionKey::new("sqd1"));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reorder_reassigns_order_one_to_n() {
        let mut registry = registry();
        registry
            .reorder(vec!["sqd2".into(), "sqd0".into(), "sqd1".into()])
            .unwrap();
        let ordered: Vec<(&str, u32)> = registry
            .ordered()
            .iter()
            .map(|question| (question.key.as_str(), question.order))
            .collect();
        assert_eq!(ordered, [("sqd2", 1), ("sqd0", 2), ("sqd1", 3)]);
    }

    #[test]
    fn reorder_with_dropped_key_fails_and_preserves_registry() {
        let mut registry = registry();
        let before = registry.ordered().to_vec();
        let result = registry.reorder(vec!["sqd2".into(), "sqd0".into()]);
        assert_eq!(result, Err(SurveyError::InvalidPermutation));
        assert_eq!(registry.ordered(), before);
    }

    #[test]
    fn reorder_with_smuggled_key_fails() {
        let mut registry = registry();
        let result = registry.reorder(vec![
            "sqd2".into(),
            "sqd0".into(),
            "sqd1".into(),
            "intruder".into(),
        ]);
        assert_eq!(result, Err(SurveyError::InvalidPermutation));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn reorder_with_duplicated_key_fails() {
        let mut registry = registry();
        let result = registry.reorder(vec!["sqd2".into(), "sqd0".into(), "sqd0".into()]);
        assert_eq!(result, Err(SurveyError::InvalidPermutation));
    }
}
