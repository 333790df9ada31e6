//! Modal state kept in step with the browser's back stack.
//!
//! Opening a modal pushes a history marker so that a back gesture closes the
//! modal instead of leaving the page. Closing from inside the page walks back
//! over that marker and lets the resulting pop notification clear the state.

use log::{debug, warn};
use thiserror::Error;

use crate::models::ModalId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkerError {
    #[error("no browser history available")]
    Unavailable,
    #[error("pushState rejected: {0}")]
    Rejected(String),
}

/// The two calls the controller makes into the hosting environment.
///
/// Pop notifications travel the other way: whoever owns the host subscribes
/// to them and forwards each one to [`ModalHistory::handle_pop`].
pub trait NavigationHost {
    fn push_marker(&self, modal: &str) -> Result<(), MarkerError>;
    fn go_back(&self);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalPhase {
    #[default]
    Closed,
    Open(ModalId),
    /// Back-navigation issued, pop notification not yet received.
    Closing(ModalId),
}

pub struct ModalHistory<H: NavigationHost> {
    host: H,
    phase: ModalPhase,
    // Sole source of truth for whether close_modal walks back or clears.
    marker_pending: bool,
}

impl<H: NavigationHost> ModalHistory<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            phase: ModalPhase::Closed,
            marker_pending: false,
        }
    }

    /// Makes `modal` the active one and pushes exactly one marker for it.
    ///
    /// Whatever was open before is overwritten without being closed, so two
    /// opens in a row leave two markers on the stack. If the push fails the
    /// modal still opens, and the flag only reflects markers that exist.
    pub fn open_modal(&mut self, modal: impl Into<ModalId>) {
        let modal = modal.into();
        debug!("Opening modal {}", modal);
        match self.host.push_marker(&modal) {
            Ok(()) => self.marker_pending = true,
            Err(err) => warn!("Opening {} without a history marker: {}", modal, err),
        }
        self.phase = ModalPhase::Open(modal);
    }

    pub fn close_modal(&mut self) {
        if self.marker_pending {
            self.marker_pending = false;
            self.phase = match std::mem::take(&mut self.phase) {
                ModalPhase::Open(modal) => ModalPhase::Closing(modal),
                other => other,
            };
            debug!("Closing modal through history back");
            self.host.go_back();
        } else {
            self.phase = ModalPhase::Closed;
        }
    }

    /// Called for every back/forward navigation the host reports.
    pub fn handle_pop(&mut self) {
        if self.phase == ModalPhase::Closed {
            return;
        }
        debug!("History pop closed modal {:?}", self.active_modal());
        self.marker_pending = false;
        self.phase = ModalPhase::Closed;
    }

    pub fn is_modal_open(&self, modal: &str) -> bool {
        self.active_modal() == Some(modal)
    }

    pub fn active_modal(&self) -> Option<&str> {
        match &self.phase {
            ModalPhase::Open(modal) | ModalPhase::Closing(modal) => Some(modal),
            ModalPhase::Closed => None,
        }
    }

    pub fn phase(&self) -> &ModalPhase {
        &self.phase
    }

    #[cfg(test)]
    pub fn marker_pending(&self) -> bool {
        self.marker_pending
    }

    /// Owner is going away. A pending marker stays in the browser history:
    /// walking back here would fight whatever navigation caused the unmount.
    pub fn dispose(&mut self) {
        if self.marker_pending {
            debug!("Dropping pending history marker on unmount");
        }
        self.marker_pending = false;
        self.phase = ModalPhase::Closed;
    }

    #[cfg(test)]
    pub fn host(&self) -> &H {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Debug, PartialEq)]
    enum HostCall {
        Push(String),
        Back,
    }

    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<HostCall>>,
        reject_pushes: bool,
    }

    impl RecordingHost {
        fn backs(&self) -> usize {
            self.calls.borrow().iter().filter(|c| **c == HostCall::Back).count()
        }

        fn pushes(&self) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|c| matches!(c, HostCall::Push(_)))
                .count()
        }
    }

    impl NavigationHost for RecordingHost {
        fn push_marker(&self, modal: &str) -> Result<(), MarkerError> {
            if self.reject_pushes {
                return Err(MarkerError::Rejected("SecurityError".to_string()));
            }
            self.calls.borrow_mut().push(HostCall::Push(modal.to_string()));
            Ok(())
        }

        fn go_back(&self) {
            self.calls.borrow_mut().push(HostCall::Back);
        }
    }

    fn controller() -> ModalHistory<RecordingHost> {
        ModalHistory::new(RecordingHost::default())
    }

    #[test]
    fn starts_closed() {
        let modals = controller();
        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert_eq!(modals.active_modal(), None);
        assert!(!modals.marker_pending());
    }

    #[test]
    fn open_sets_active_and_pushes_one_marker() {
        let mut modals = controller();
        modals.open_modal("social-media");

        assert!(modals.is_modal_open("social-media"));
        assert!(!modals.is_modal_open("ads"));
        assert!(modals.marker_pending());
        assert_eq!(
            *modals.host().calls.borrow(),
            vec![HostCall::Push("social-media".to_string())]
        );
    }

    #[test]
    fn close_with_pending_marker_goes_back_once_and_waits_for_pop() {
        let mut modals = controller();
        modals.open_modal("ads");
        modals.close_modal();

        assert_eq!(modals.host().backs(), 1);
        assert_eq!(modals.phase(), &ModalPhase::Closing("ads".to_string()));
        assert!(modals.is_modal_open("ads"));
        assert!(!modals.marker_pending());

        modals.handle_pop();
        assert!(!modals.is_modal_open("ads"));
        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert_eq!(modals.host().backs(), 1);
    }

    #[test]
    fn close_without_marker_clears_synchronously() {
        let mut modals = controller();
        modals.open_modal("website");
        modals.handle_pop();
        assert!(!modals.marker_pending());

        modals.close_modal();
        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert_eq!(modals.host().backs(), 0);
    }

    #[test]
    fn close_when_nothing_open_is_a_no_op() {
        let mut modals = controller();
        modals.close_modal();
        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert!(modals.host().calls.borrow().is_empty());
    }

    #[test]
    fn pop_without_active_modal_is_ignored() {
        let mut modals = controller();
        modals.handle_pop();
        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert!(modals.host().calls.borrow().is_empty());
    }

    #[test]
    fn back_gesture_closes_and_later_close_does_not_navigate() {
        let mut modals = controller();
        modals.open_modal("x");
        modals.handle_pop();
        assert!(!modals.is_modal_open("x"));

        modals.close_modal();
        assert_eq!(modals.host().backs(), 0);
        assert_eq!(modals.phase(), &ModalPhase::Closed);
    }

    #[test]
    fn second_open_overwrites_and_pushes_again() {
        let mut modals = controller();
        modals.open_modal("social-media");
        modals.open_modal("ads");

        assert!(modals.is_modal_open("ads"));
        assert!(!modals.is_modal_open("social-media"));
        assert_eq!(modals.host().pushes(), 2);

        modals.close_modal();
        assert_eq!(modals.host().backs(), 1);
    }

    #[test]
    fn open_during_closing_proceeds_and_stale_pop_clears_it() {
        let mut modals = controller();
        modals.open_modal("a");
        modals.close_modal();
        modals.open_modal("b");

        assert_eq!(modals.phase(), &ModalPhase::Open("b".to_string()));
        assert!(modals.marker_pending());

        // The pop belonging to the first close lands after the reopen.
        modals.handle_pop();
        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert!(!modals.marker_pending());
    }

    #[test]
    fn double_close_before_pop_clears_directly() {
        let mut modals = controller();
        modals.open_modal("a");
        modals.close_modal();
        modals.close_modal();

        assert_eq!(modals.phase(), &ModalPhase::Closed);
        assert_eq!(modals.host().backs(), 1);

        modals.handle_pop();
        assert_eq!(modals.phase(), &ModalPhase::Closed);
    }

    #[test]
    fn rapid_cycles_keep_marker_flag_in_step() {
        let mut modals = controller();
        for _ in 0..5 {
            modals.open_modal("smm-samples");
            assert!(modals.marker_pending());
            modals.close_modal();
            assert!(!modals.marker_pending());
            modals.handle_pop();
        }
        let host = modals.host();
        assert_eq!(host.pushes(), 5);
        assert_eq!(host.backs(), 5);
        assert_eq!(modals.phase(), &ModalPhase::Closed);
    }

    #[test]
    fn failed_push_opens_without_marker_and_close_stays_on_page() {
        let mut modals = ModalHistory::new(RecordingHost {
            reject_pushes: true,
            ..RecordingHost::default()
        });
        modals.open_modal("x");

        assert!(modals.is_modal_open("x"));
        assert!(!modals.marker_pending());

        modals.close_modal();
        assert_eq!(modals.host().backs(), 0);
        assert_eq!(modals.phase(), &ModalPhase::Closed);
    }

    #[test]
    fn failed_push_keeps_earlier_marker_pending() {
        let mut modals = controller();
        modals.open_modal("a");
        modals.host.reject_pushes = true;
        modals.open_modal("b");

        assert!(modals.is_modal_open("b"));
        assert!(modals.marker_pending());
        modals.close_modal();
        assert_eq!(modals.host().backs(), 1);
    }

    #[test]
    fn dispose_drops_marker_without_navigating() {
        let mut modals = controller();
        modals.open_modal("app");
        modals.dispose();

        assert!(!modals.marker_pending());
        assert_eq!(modals.active_modal(), None);
        assert_eq!(modals.host().backs(), 0);
    }
}
