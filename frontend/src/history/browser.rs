use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{window, Event};
use yew::functional::UseForceUpdateHandle;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::history::controller::{MarkerError, ModalHistory, ModalPhase, NavigationHost};

#[derive(Serialize)]
struct HistoryMarker<'a> {
    modal: &'a str,
}

/// `window.history` as a [`NavigationHost`].
pub struct BrowserHistory;

impl NavigationHost for BrowserHistory {
    fn push_marker(&self, modal: &str) -> Result<(), MarkerError> {
        let window = window().ok_or(MarkerError::Unavailable)?;
        let history = window.history().map_err(|_| MarkerError::Unavailable)?;

        let state = serde_wasm_bindgen::to_value(&HistoryMarker { modal }).unwrap_or(JsValue::NULL);
        // Same URL, only the state differs
        let href = window.location().href().ok();
        history
            .push_state_with_url(&state, "", href.as_deref())
            .map_err(|err| MarkerError::Rejected(format!("{:?}", err)))
    }

    fn go_back(&self) {
        if let Some(history) = window().and_then(|w| w.history().ok()) {
            if let Err(err) = history.back() {
                warn!("history.back() failed: {:?}", err);
            }
        }
    }
}

#[derive(Clone)]
pub struct UseModalHistoryHandle {
    inner: Rc<RefCell<ModalHistory<BrowserHistory>>>,
    update: UseForceUpdateHandle,
}

impl PartialEq for UseModalHistoryHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl UseModalHistoryHandle {
    pub fn open(&self, modal: &str) {
        self.inner.borrow_mut().open_modal(modal);
        self.update.force_update();
    }

    pub fn close(&self) {
        self.inner.borrow_mut().close_modal();
        self.update.force_update();
    }

    pub fn is_open(&self, modal: &str) -> bool {
        self.inner.borrow().is_modal_open(modal)
    }

    pub fn open_callback<E>(&self, modal: &'static str) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_| handle.open(modal))
    }

    /// Adapter for dialogs that report `open: bool` changes. Only a request
    /// to close does anything.
    pub fn on_open_change(&self, modal: &str) -> Callback<bool> {
        let handle = self.clone();
        let modal = modal.to_string();
        Callback::from(move |open: bool| {
            if !open {
                log::debug!("Dialog {} asked to close", modal);
                handle.close();
            }
        })
    }
}

/// Modal state for one page, closed by the browser back button as well as by
/// the page's own close controls.
#[hook]
pub fn use_modal_with_history() -> UseModalHistoryHandle {
    let inner = use_mut_ref(|| ModalHistory::new(BrowserHistory));
    let update = use_force_update();

    {
        let inner = inner.clone();
        let update = update.clone();
        use_event_with_window("popstate", move |_: Event| {
            let was_open = *inner.borrow().phase() != ModalPhase::Closed;
            inner.borrow_mut().handle_pop();
            if was_open {
                update.force_update();
            }
        });
    }

    {
        let inner = inner.clone();
        use_unmount(move || inner.borrow_mut().dispose());
    }

    UseModalHistoryHandle { inner, update }
}
