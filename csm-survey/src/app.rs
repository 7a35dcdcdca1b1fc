//! The owned application state: every collection plus the mode controller.

use std::cell::RefCell;
use std::rc::Rc;

use csm_survey_types::{
    Question, QuestionKey, QuestionUpdate, ResponseDraft, SurveyError, SurveyResponse, User,
    UserUpdate,
};

use crate::directory::UserDirectory;
use crate::kiosk::{KioskChannel, KioskStateStore};
use crate::mode::{InputEvent, LandingScreen, ModeController, View};
use crate::registry::QuestionRegistry;
use crate::response_log::ResponseLog;
use crate::seed;

/// The whole in-memory application state.
///
/// Owns the question registry, the response log, the user directory, and the
/// mode controller. The presentation surface reads through the accessors and
/// mutates through the intent methods; it never holds the collections itself.
#[derive(Debug)]
pub struct SurveyApp<S: KioskStateStore> {
    questions: QuestionRegistry,
    responses: ResponseLog,
    users: UserDirectory,
    mode: ModeController<S>,
}

impl<S: KioskStateStore> SurveyApp<S> {
    /// Empty state on top of the given store and channel.
    pub fn new(store: Rc<RefCell<S>>, channel: Rc<KioskChannel>) -> Self {
        Self {
            questions: QuestionRegistry::new(),
            responses: ResponseLog::new(),
            users: UserDirectory::new(),
            mode: ModeController::new(store, channel),
        }
    }

    /// State pre-populated with the stock questionnaire and fixtures.
    pub fn seeded(store: Rc<RefCell<S>>, channel: Rc<KioskChannel>) -> Self {
        Self {
            questions: QuestionRegistry::from_questions(seed::questions()),
            responses: ResponseLog::from_responses(seed::responses()),
            users: UserDirectory::from_users(seed::users()),
            mode: ModeController::new(store, channel),
        }
    }

    // === Read-only views for the presentation surface ===

    /// Questions sorted by `order` ascending.
    pub fn questions(&self) -> &[Question] {
        self.questions.ordered()
    }

    /// Responses, most recent first.
    pub fn responses(&self) -> &[SurveyResponse] {
        self.responses.responses()
    }

    /// Administrative users.
    pub fn users(&self) -> &[User] {
        self.users.users()
    }

    /// The active view.
    pub fn view(&self) -> View {
        self.mode.view()
    }

    /// Landing variant for the current kiosk flag.
    pub fn landing_screen(&self) -> LandingScreen {
        self.mode.landing_screen()
    }

    /// The in-memory mirror of the kiosk flag.
    pub fn kiosk_mode(&self) -> bool {
        self.mode.kiosk_mode()
    }

    // === Question intents ===

    /// Add a question with a fresh unique key.
    pub fn add_question(&mut self, question: Question) -> Result<(), SurveyError> {
        self.questions.add(question)
    }

    /// Merge a partial-field patch into an existing question.
    pub fn update_question(
        &mut self,
        key: &QuestionKey,
        update: QuestionUpdate,
    ) -> Result<(), SurveyError> {
        self.questions.update(key, update)
    }

    /// Remove a question; removing an absent key is a no-op.
    pub fn delete_question(&mut self, key: &QuestionKey) {
        self.questions.delete(key);
    }

    /// Replace the question ordering with a permutation of the current keys.
    pub fn reorder_questions(&mut self, keys: Vec<QuestionKey>) -> Result<(), SurveyError> {
        self.questions.reorder(keys)
    }

    // === Response intent ===

    /// Submit a draft response; returns the fully populated record.
    pub fn submit_response(
        &mut self,
        draft: ResponseDraft,
    ) -> Result<&SurveyResponse, SurveyError> {
        self.responses.submit(draft)
    }

    // === User intents ===

    /// Add a user; returns the assigned id.
    pub fn add_user(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
        status: impl Into<String>,
    ) -> u32 {
        self.users.add(name, email, role, status)
    }

    /// Merge a partial-field patch into an existing user.
    pub fn update_user(&mut self, id: u32, update: UserUpdate) -> Result<(), SurveyError> {
        self.users.update(id, update)
    }

    /// Remove a user; removing an absent id is a no-op.
    pub fn delete_user(&mut self, id: u32) {
        self.users.delete(id);
    }

    // === Mode intents ===

    /// Feed one input event to the mode controller.
    pub fn handle_input(&mut self, event: InputEvent) {
        self.mode.handle(event);
    }

    /// Admin-surface writer for the kiosk flag.
    pub fn set_kiosk(&mut self, enabled: bool) {
        self.mode.set_kiosk(enabled);
    }

    /// Re-read the durable kiosk flag (storage-change hook).
    pub fn refresh_kiosk(&mut self) {
        self.mode.refresh_kiosk();
    }
}
