//! View selection and kiosk-mode tracking.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::kiosk::{KioskChannel, KioskStateStore};

/// The active top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum View {
    Landing,
    Survey,
    Admin,
}

/// Which landing variant the presentation layer should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LandingScreen {
    /// The regular landing page, with admin-login affordances.
    Standard,

    /// The restricted variant for unattended public terminals.
    Kiosk,
}

/// Discrete named inputs fed to the controller by the input surface.
///
/// The two emergency events are bound to reserved key combinations at the
/// boundary and must reach the controller regardless of kiosk restrictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Start taking the survey from a landing screen.
    StartSurvey,

    /// Abandon the survey and return to landing.
    Cancel,

    /// Enter the admin dashboard. Ignored while kiosk mode is on.
    AdminLogin,

    /// Leave the admin dashboard.
    Logout,

    /// Reserved combination: clear the durable kiosk flag everywhere.
    EmergencyDisableKiosk,

    /// Reserved combination: force the admin view regardless of kiosk state.
    EmergencyAdminAccess,
}

/// Selects the active view and mirrors the durable kiosk flag.
///
/// The durable flag is owned by the injected store; the controller keeps an
/// in-memory mirror and broadcasts changes on the channel so other contexts
/// sharing the same store can refresh without a reload. The machine starts at
/// `Landing` and has no terminal state.
#[derive(Debug)]
pub struct ModeController<S: KioskStateStore> {
    view: View,
    kiosk: bool,
    store: Rc<RefCell<S>>,
    channel: Rc<KioskChannel>,
}

impl<S: KioskStateStore> ModeController<S> {
    /// Start at the landing view with the kiosk flag read from the store.
    pub fn new(store: Rc<RefCell<S>>, channel: Rc<KioskChannel>) -> Self {
        let kiosk = store.borrow().get();
        Self {
            view: View::Landing,
            kiosk,
            store,
            channel,
        }
    }

    /// The active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The in-memory mirror of the kiosk flag.
    pub fn kiosk_mode(&self) -> bool {
        self.kiosk
    }

    /// Landing variant for the current kiosk flag.
    pub fn landing_screen(&self) -> LandingScreen {
        if self.kiosk {
            LandingScreen::Kiosk
        } else {
            LandingScreen::Standard
        }
    }

    /// The shared notification channel.
    pub fn channel(&self) -> &Rc<KioskChannel> {
        &self.channel
    }

    /// Apply one input event.
    ///
    /// Events that do not apply to the current state are ignored. `AdminLogin`
    /// is additionally ignored while kiosk mode is on; the emergency events
    /// work unconditionally.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::StartSurvey if self.view == View::Landing => self.set_view(View::Survey),
            InputEvent::Cancel if self.view == View::Survey => self.set_view(View::Landing),
            InputEvent::AdminLogin if !self.kiosk && self.view != View::Admin => {
                self.set_view(View::Admin);
            }
            InputEvent::Logout if self.view == View::Admin => self.set_view(View::Landing),
            InputEvent::EmergencyDisableKiosk => self.emergency_disable_kiosk(),
            InputEvent::EmergencyAdminAccess => self.set_view(View::Admin),
            _ => {}
        }
    }

    /// Admin-surface writer for the kiosk flag: persists it, updates the
    /// mirror, and notifies other contexts.
    pub fn set_kiosk(&mut self, enabled: bool) {
        self.store.borrow_mut().set(enabled);
        self.kiosk = enabled;
        tracing::debug!(enabled, "kiosk flag set");
        self.channel.notify();
    }

    /// Re-read the durable flag into the mirror.
    ///
    /// Hosts call this from their channel or storage-change listener so the
    /// context picks up flips made elsewhere.
    pub fn refresh_kiosk(&mut self) {
        self.kiosk = self.store.borrow().get();
    }

    fn emergency_disable_kiosk(&mut self) {
        self.store.borrow_mut().clear();
        self.kiosk = false;
        tracing::warn!("kiosk mode disabled via emergency override");
        self.channel.notify();
    }

    fn set_view(&mut self, view: View) {
        if self.view != view {
            tracing::debug!(previous = ?self.view, next = ?view, "view transition");
            self.view = view;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::kiosk::MemoryKioskStore;

    use super::*;

    fn controller(kiosk: bool) -> ModeController<MemoryKioskStore> {
        let store = Rc::new(RefCell::new(MemoryKioskStore::with_flag(kiosk)));
        ModeController::new(store, Rc::new(KioskChannel::new()))
    }

    #[test]
    fn starts_at_landing_with_store_flag() {
        let controller = controller(true);
        assert_eq!(controller.view(), View::Landing);
        assert!(controller.kiosk_mode());
        assert_eq!(controller.landing_screen(), LandingScreen::Kiosk);
    }

    #[test]
    fn survey_round_trip() {
        let mut controller = controller(false);
        controller.handle(InputEvent::StartSurvey);
        assert_eq!(controller.view(), View::Survey);
        controller.handle(InputEvent::Cancel);
        assert_eq!(controller.view(), View::Landing);
    }

    #[test]
    fn admin_login_and_logout() {
        let mut controller = controller(false);
        controller.handle(InputEvent::AdminLogin);
        assert_eq!(controller.view(), View::Admin);
        controller.handle(InputEvent::Logout);
        assert_eq!(controller.view(), View::Landing);
    }

    #[test]
    fn admin_login_from_survey() {
        let mut controller = controller(false);
        controller.handle(InputEvent::StartSurvey);
        controller.handle(InputEvent::AdminLogin);
        assert_eq!(controller.view(), View::Admin);
    }

    #[test]
    fn kiosk_blocks_ordinary_admin_login() {
        let mut controller = controller(true);
        controller.handle(InputEvent::AdminLogin);
        assert_eq!(controller.view(), View::Landing);
    }

    #[test]
    fn emergency_admin_access_ignores_kiosk() {
        let mut controller = controller(true);
        controller.handle(InputEvent::EmergencyAdminAccess);
        assert_eq!(controller.view(), View::Admin);
        assert!(controller.kiosk_mode());
    }

    #[test]
    fn emergency_disable_clears_store_and_mirror() {
        let store = Rc::new(RefCell::new(MemoryKioskStore::with_flag(true)));
        let mut controller =
            ModeController::new(Rc::clone(&store), Rc::new(KioskChannel::new()));
        controller.handle(InputEvent::EmergencyDisableKiosk);
        assert!(!controller.kiosk_mode());
        assert!(!store.borrow().get());
        assert_eq!(controller.landing_screen(), LandingScreen::Standard);
    }

    #[test]
    fn inapplicable_events_are_ignored() {
        let mut controller = controller(false);
        controller.handle(InputEvent::Cancel);
        assert_eq!(controller.view(), View::Landing);
        controller.handle(InputEvent::Logout);
        assert_eq!(controller.view(), View::Landing);
        controller.handle(InputEvent::StartSurvey);
        controller.handle(InputEvent::StartSurvey);
        assert_eq!(controller.view(), View::Survey);
    }

    #[test]
    fn refresh_picks_up_external_store_changes() {
        let store = Rc::new(RefCell::new(MemoryKioskStore::new()));
        let mut controller =
            ModeController::new(Rc::clone(&store), Rc::new(KioskChannel::new()));
        store.borrow_mut().set(true);
        assert!(!controller.kiosk_mode());
        controller.refresh_kiosk();
        assert!(controller.kiosk_mode());
    }
}
