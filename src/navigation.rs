//! Navigation State
//!
//! The current page and its parameter, handed to descendants through an
//! explicit context handle. Any component may read `state`; writes go only
//! through [`NavigationHandle::navigate`].

use leptos::prelude::*;

use crate::controller::{HouseListState, ViewMode};
use crate::models::House;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavTarget {
    #[default]
    Home,
    House,
    Numbers,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub current: NavTarget,
    pub param: Option<House>,
}

impl NavigationState {
    /// State after navigating to `target`. The house page needs a house;
    /// without one it falls back to home.
    pub fn navigated(target: NavTarget, param: Option<House>) -> Self {
        match (target, param) {
            (NavTarget::House, None) => Self::default(),
            (NavTarget::House, Some(house)) => Self { current: NavTarget::House, param: Some(house) },
            (other, _) => Self { current: other, param: None },
        }
    }

    /// House for the detail page: the navigation payload, but only while it
    /// is still the list's resolved selection.
    pub fn detail_house(&self, listing: &HouseListState) -> Option<House> {
        let house = self.param.as_ref()?;
        match listing.view_mode() {
            ViewMode::Detail(selected) if selected.id == house.id => Some(house.clone()),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct NavigationHandle {
    pub state: ReadSignal<NavigationState>,
    set_state: WriteSignal<NavigationState>,
}

impl NavigationHandle {
    pub fn new() -> Self {
        let (state, set_state) = signal(NavigationState::default());
        Self { state, set_state }
    }

    pub fn navigate(&self, target: NavTarget, param: Option<House>) {
        web_sys::console::log_1(&format!("[NAV] -> {:?}", target).into());
        self.set_state.set(NavigationState::navigated(target, param));
    }

    pub fn current(&self) -> NavTarget {
        self.state.get().current
    }
}

pub fn use_navigation() -> NavigationHandle {
    expect_context::<NavigationHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        let state = NavigationState::default();
        assert_eq!(state.current, NavTarget::Home);
        assert!(state.param.is_none());
    }

    #[test]
    fn test_house_requires_param() {
        assert_eq!(NavigationState::navigated(NavTarget::House, None), NavigationState::default());

        let house = House::new(1, "A", "B", 1);
        let state = NavigationState::navigated(NavTarget::House, Some(house.clone()));
        assert_eq!(state.current, NavTarget::House);
        assert_eq!(state.param, Some(house));
    }

    fn listing_with_selection(id: u32) -> HouseListState {
        let mut listing = HouseListState::new();
        listing.push_house(House::new(1, "A", "B", 1)).unwrap();
        listing.push_house(House::new(2, "C", "D", 2)).unwrap();
        listing.select(id).unwrap();
        listing
    }

    #[test]
    fn test_detail_house_uses_payload() {
        let house = House::new(1, "A", "B", 1);
        let state = NavigationState::navigated(NavTarget::House, Some(house.clone()));
        assert_eq!(state.detail_house(&listing_with_selection(1)), Some(house));
    }

    #[test]
    fn test_detail_house_ignores_stale_payload() {
        let state = NavigationState::navigated(NavTarget::House, Some(House::new(1, "A", "B", 1)));
        assert_eq!(state.detail_house(&listing_with_selection(2)), None);

        let mut cleared = listing_with_selection(1);
        cleared.clear_selection();
        assert_eq!(state.detail_house(&cleared), None);
    }

    #[test]
    fn test_home_drops_param() {
        let house = House::new(1, "A", "B", 1);
        let state = NavigationState::navigated(NavTarget::Home, Some(house));
        assert!(state.param.is_none());
    }
}
