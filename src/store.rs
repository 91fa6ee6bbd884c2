//! View Session Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Each mounted
//! `App` owns exactly one store; nothing here outlives the view session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::controller::{HouseListState, ListError, Message, NumberList};
use crate::models::House;

/// Session state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    /// House list, selection and fetch progress
    pub listing: HouseListState,
    /// Numbers for the "Add Item" page
    pub numbers: NumberList,
}

pub type SessionStore = Store<SessionState>;

pub fn use_session_store() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Flipped on teardown so late async results are dropped
#[derive(Clone, Debug, Default)]
pub struct SessionGuard(Arc<AtomicBool>);

impl SessionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dispose(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_live(&self) -> bool {
        !self.0.load(Ordering::SeqCst)
    }
}

// ========================
// Store Helper Functions
// ========================

/// Applies a controller message, logging rejected transitions
pub fn store_dispatch(store: &SessionStore, message: Message) -> Result<(), ListError> {
    let result = store.listing().write().update(message);
    if let Err(e) = &result {
        web_sys::console::log_1(&format!("[HOUSES] {}", e).into());
    }
    result
}

pub fn store_select_house(store: &SessionStore, id: u32) -> Result<(), ListError> {
    store_dispatch(store, Message::HouseSelected(id))
}

pub fn store_clear_selection(store: &SessionStore) {
    store.listing().write().clear_selection();
}

pub fn store_add_house(store: &SessionStore, increment: u32) -> Result<u32, ListError> {
    store.listing().write().add_house(increment)
}

pub fn store_add_number(store: &SessionStore, increment: i64) -> Result<i64, ListError> {
    store.numbers().write().add_value(increment)
}

/// Message for a fetch result, or `None` once the session is gone
pub fn fetch_message(guard: &SessionGuard, result: Result<Vec<House>, String>) -> Option<Message> {
    if !guard.is_live() {
        return None;
    }
    Some(match result {
        Ok(houses) => Message::HousesLoaded(houses),
        Err(e) => Message::LoadFailed(e),
    })
}

/// Applies a fetch result unless the session is already gone
pub fn store_apply_fetch(store: &SessionStore, guard: &SessionGuard, result: Result<Vec<House>, String>) {
    match fetch_message(guard, result) {
        Some(message) => {
            if let Message::HousesLoaded(houses) = &message {
                web_sys::console::log_1(&format!("[HOUSES] Loaded {} houses", houses.len()).into());
            }
            let _ = store_dispatch(store, message);
        }
        None => web_sys::console::log_1(&"[HOUSES] Session closed, dropping fetch result".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_lifecycle() {
        let guard = SessionGuard::new();
        let shared = guard.clone();
        assert!(shared.is_live());

        guard.dispose();
        assert!(!shared.is_live());
    }

    #[test]
    fn test_live_session_applies_fetch() {
        let guard = SessionGuard::new();
        let houses = vec![House::new(1, "A", "B", 1)];
        assert!(matches!(fetch_message(&guard, Ok(houses)), Some(Message::HousesLoaded(h)) if h.len() == 1));
        assert!(matches!(fetch_message(&guard, Err("boom".into())), Some(Message::LoadFailed(_))));
    }

    #[test]
    fn test_late_fetch_after_teardown_is_dropped() {
        let guard = SessionGuard::new();
        guard.dispose();
        assert!(fetch_message(&guard, Ok(vec![House::new(1, "A", "B", 1)])).is_none());
        assert!(fetch_message(&guard, Err("boom".into())).is_none());

        // Nothing reaches the list state
        let mut listing = HouseListState::new();
        listing.begin_load();
        if let Some(message) = fetch_message(&guard, Ok(vec![House::new(1, "A", "B", 1)])) {
            listing.update(message).unwrap();
        }
        assert!(listing.houses().is_empty());
        assert_eq!(listing.phase(), crate::controller::LoadPhase::Pending);
    }
}
