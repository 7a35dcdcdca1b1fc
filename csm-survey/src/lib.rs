//! # csm-survey
//!
//! In-memory data model and state engine for a client satisfaction survey
//! (the ARTA "Client Satisfaction Measurement" questionnaire).
//!
//! The engine owns three record collections and one state machine:
//! - [`QuestionRegistry`] - the ordered questionnaire, with add/update/delete
//!   and permutation-checked reorder
//! - [`ResponseLog`] - submitted responses, most recent first, with the
//!   derived satisfaction average and monotonic id assignment
//! - [`UserDirectory`] - administrative user records
//! - [`ModeController`] - selects the active view (landing/survey/admin) and
//!   mirrors the durable kiosk flag shared across contexts
//!
//! Persistence, authentication, and rendering are external collaborators: the
//! engine only assumes an injected [`KioskStateStore`] for the durable kiosk
//! flag and a [`KioskChannel`] for cross-context change notification.
//! [`SurveyApp`] bundles everything into one owned application state.

// Re-export all types from csm-survey-types
pub use csm_survey_types::*;

mod app;
pub use app::SurveyApp;

mod directory;
pub use directory::UserDirectory;

mod ident;
pub use ident::next_id;

mod kiosk;
pub use kiosk::{KioskChannel, KioskStateStore, MemoryKioskStore};

mod mode;
pub use mode::{InputEvent, LandingScreen, ModeController, View};

mod registry;
pub use registry::QuestionRegistry;

mod response_log;
pub use response_log::{ResponseLog, generate_ref_id};

mod score;
pub use score::{ALL_NA_AVERAGE, compute_average};

pub mod seed;
