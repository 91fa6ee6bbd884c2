//! View-State Controller
//!
//! Owns the house list and the current selection for one view session.
//! State only changes through [`HouseListState::update`]; the helper methods
//! are thin wrappers that build a [`Message`].

use std::fmt;

use crate::models::House;

/// Record appended by the "Add" button on the house list
pub const ADDED_HOUSE_ADDRESS: &str = "32 Valley Way, New York";
pub const ADDED_HOUSE_COUNTRY: &str = "USA";
pub const ADDED_HOUSE_PRICE: u64 = 1_000_000;

pub const HOUSE_ADD_INCREMENT: u32 = 1;
pub const NUMBER_ADD_INCREMENT: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Selection key not present in the list
    UnknownHouse(u32),
    /// A record with this id is already in the list
    DuplicateId(u32),
    /// `max + increment` does not fit the value type
    Overflow,
    /// Rejected by a selection rule
    Rejected(String),
    /// The house fetch has not resolved yet
    NotLoaded,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::UnknownHouse(id) => write!(f, "house {} is not in the list", id),
            ListError::DuplicateId(id) => write!(f, "house {} is already in the list", id),
            ListError::Overflow => write!(f, "next value overflows"),
            ListError::Rejected(reason) => write!(f, "selection rejected: {}", reason),
            ListError::NotLoaded => write!(f, "houses are still loading"),
        }
    }
}

impl std::error::Error for ListError {}

/// Hook run before a house becomes the selection.
pub trait SelectionRule {
    fn check(&self, house: &House) -> Result<(), ListError>;
}

/// Accepts every house. No selection rules exist yet.
pub struct PassThrough;

impl SelectionRule for PassThrough {
    fn check(&self, _house: &House) -> Result<(), ListError> {
        Ok(())
    }
}

/// Progress of the one-per-session house fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Pending,
    Loaded,
    Failed,
}

pub enum Message {
    HousesLoaded(Vec<House>),
    LoadFailed(String),
    HouseSelected(u32),
    SelectionCleared,
    HouseAdded(House),
}

/// What the session currently displays
#[derive(Debug, PartialEq)]
pub enum ViewMode<'a> {
    Listing,
    Detail(&'a House),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HouseListState {
    houses: Vec<House>,
    selected: Option<u32>,
    phase: LoadPhase,
    last_error: Option<String>,
}

impl HouseListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn selected_id(&self) -> Option<u32> {
        self.selected
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Marks the fetch as issued. Returns `true` only the first time.
    pub fn begin_load(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            return false;
        }
        self.phase = LoadPhase::Pending;
        true
    }

    pub fn find(&self, id: u32) -> Option<&House> {
        self.houses.iter().find(|h| h.id == id)
    }

    /// Selection resolved against the list; a dangling key counts as none.
    pub fn selected_house(&self) -> Option<&House> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn view_mode(&self) -> ViewMode<'_> {
        match self.selected_house() {
            Some(house) => ViewMode::Detail(house),
            None => ViewMode::Listing,
        }
    }

    pub fn update(&mut self, message: Message) -> Result<(), ListError> {
        match message {
            Message::HousesLoaded(houses) => {
                // Only the pending fetch may fill the list
                if self.phase == LoadPhase::Pending {
                    self.houses = houses;
                    self.phase = LoadPhase::Loaded;
                }
            }
            Message::LoadFailed(reason) => {
                if self.phase == LoadPhase::Pending {
                    self.houses.clear();
                    self.phase = LoadPhase::Failed;
                    self.last_error = Some(reason);
                }
            }
            Message::HouseSelected(id) => {
                let house = self.find(id).ok_or(ListError::UnknownHouse(id))?;
                PassThrough.check(house)?;
                self.selected = Some(id);
            }
            Message::SelectionCleared => self.clear_selection(),
            Message::HouseAdded(house) => {
                // The fetch result replaces the list, so nothing may be added before it
                if self.phase == LoadPhase::Pending {
                    return Err(ListError::NotLoaded);
                }
                if self.find(house.id).is_some() {
                    return Err(ListError::DuplicateId(house.id));
                }
                self.houses.push(house);
            }
        }
        Ok(())
    }

    pub fn select(&mut self, id: u32) -> Result<(), ListError> {
        self.update(Message::HouseSelected(id))
    }

    /// Like [`select`](Self::select) but with a caller-supplied rule.
    pub fn select_with(&mut self, id: u32, rule: &impl SelectionRule) -> Result<(), ListError> {
        let house = self.find(id).ok_or(ListError::UnknownHouse(id))?;
        rule.check(house)?;
        self.update(Message::HouseSelected(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Whether the list accepts new records
    pub fn can_add(&self) -> bool {
        self.phase != LoadPhase::Pending
    }

    pub fn push_house(&mut self, house: House) -> Result<(), ListError> {
        self.update(Message::HouseAdded(house))
    }

    /// Appends the demo record with id `max(ids) + increment`.
    pub fn add_house(&mut self, increment: u32) -> Result<u32, ListError> {
        let ids: Vec<i64> = self.houses.iter().map(|h| i64::from(h.id)).collect();
        let next = next_value(&ids, i64::from(increment))?;
        let id = u32::try_from(next).map_err(|_| ListError::Overflow)?;
        self.push_house(House::new(id, ADDED_HOUSE_ADDRESS, ADDED_HOUSE_COUNTRY, ADDED_HOUSE_PRICE))?;
        Ok(id)
    }
}

/// `max(values) + increment`, seeded with `increment` for an empty list.
pub fn next_value(values: &[i64], increment: i64) -> Result<i64, ListError> {
    match values.iter().max() {
        Some(max) => max.checked_add(increment).ok_or(ListError::Overflow),
        None => Ok(increment),
    }
}

/// Numeric variant of the list, used by the "Add Item" demo page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberList {
    values: Vec<i64>,
}

impl Default for NumberList {
    fn default() -> Self {
        Self { values: vec![1, 2, 3] }
    }
}

impl NumberList {
    pub fn from_values(values: Vec<i64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn add_value(&mut self, increment: i64) -> Result<i64, ListError> {
        let next = next_value(&self.values, increment)?;
        self.values.push(next);
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(houses: Vec<House>) -> HouseListState {
        let mut state = HouseListState::new();
        assert!(state.begin_load());
        state.update(Message::HousesLoaded(houses)).unwrap();
        state
    }

    fn sample() -> Vec<House> {
        vec![
            House::new(1, "12 Valley of Kings, Geneva", "Switzerland", 900_000),
            House::new(2, "89 Road of Forks, Bern", "Switzerland", 500_000),
        ]
    }

    #[test]
    fn test_starts_empty_and_listing() {
        let state = HouseListState::new();
        assert!(state.houses().is_empty());
        assert_eq!(state.phase(), LoadPhase::Idle);
        assert_eq!(state.view_mode(), ViewMode::Listing);
    }

    #[test]
    fn test_select_then_clear() {
        let houses = sample();
        let mut state = loaded(houses.clone());

        state.select(2).unwrap();
        assert_eq!(state.view_mode(), ViewMode::Detail(&houses[1]));

        state.clear_selection();
        assert_eq!(state.view_mode(), ViewMode::Listing);
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_select_unknown_is_rejected() {
        let mut state = loaded(sample());
        state.select(1).unwrap();

        assert_eq!(state.select(42), Err(ListError::UnknownHouse(42)));
        assert_eq!(state.selected_id(), Some(1));
    }

    #[test]
    fn test_custom_rule_blocks_selection() {
        struct NoSwiss;
        impl SelectionRule for NoSwiss {
            fn check(&self, house: &House) -> Result<(), ListError> {
                if house.country == "Switzerland" {
                    return Err(ListError::Rejected("swiss".into()));
                }
                Ok(())
            }
        }

        let mut state = loaded(sample());
        assert!(state.select_with(1, &NoSwiss).is_err());
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_dangling_selection_renders_listing() {
        let mut state = loaded(sample());
        state.select(1).unwrap();
        state.houses.retain(|h| h.id != 1);

        assert_eq!(state.selected_id(), Some(1));
        assert_eq!(state.view_mode(), ViewMode::Listing);
    }

    #[test]
    fn test_begin_load_only_once() {
        let mut state = HouseListState::new();
        assert!(state.begin_load());
        assert!(!state.begin_load());
    }

    #[test]
    fn test_second_load_result_is_ignored() {
        let mut state = loaded(sample());
        state.update(Message::HousesLoaded(Vec::new())).unwrap();
        assert_eq!(state.houses().len(), 2);
        assert_eq!(state.phase(), LoadPhase::Loaded);
    }

    #[test]
    fn test_load_failure_falls_back_to_empty() {
        let mut state = HouseListState::new();
        state.begin_load();
        state.update(Message::LoadFailed("boom".into())).unwrap();

        assert!(state.houses().is_empty());
        assert_eq!(state.phase(), LoadPhase::Failed);
        assert_eq!(state.last_error(), Some("boom"));
    }

    #[test]
    fn test_duplicate_push_rejected() {
        let mut state = loaded(sample());
        let dup = House::new(2, "Elsewhere", "Nowhere", 1);

        assert_eq!(state.push_house(dup), Err(ListError::DuplicateId(2)));
        assert_eq!(state.houses().len(), 2);
        assert_eq!(state.houses()[1].address, "89 Road of Forks, Bern");
    }

    #[test]
    fn test_add_house_uses_next_id() {
        let mut state = loaded(sample());
        let id = state.add_house(1).unwrap();

        assert_eq!(id, 3);
        let added = state.find(3).unwrap();
        assert_eq!(added.address, ADDED_HOUSE_ADDRESS);
        assert_eq!(added.price, ADDED_HOUSE_PRICE);
    }

    #[test]
    fn test_add_house_on_empty_list_seeds_with_increment() {
        let mut state = HouseListState::new();
        assert_eq!(state.add_house(1), Ok(1));
    }

    #[test]
    fn test_add_while_pending_is_rejected() {
        let mut state = HouseListState::new();
        assert!(state.begin_load());
        assert!(!state.can_add());

        assert_eq!(state.add_house(1), Err(ListError::NotLoaded));
        assert!(state.houses().is_empty());

        state.update(Message::HousesLoaded(sample())).unwrap();
        assert!(state.can_add());
        assert_eq!(state.add_house(1), Ok(3));
        let ids: Vec<u32> = state.houses().iter().map(|h| h.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_add_after_failed_load_is_allowed() {
        let mut state = HouseListState::new();
        state.begin_load();
        state.update(Message::LoadFailed("boom".into())).unwrap();
        assert_eq!(state.add_house(1), Ok(1));
    }

    #[test]
    fn test_clear_message_resets_selection() {
        let mut state = loaded(sample());
        state.select(1).unwrap();
        assert_eq!(state.update(Message::SelectionCleared), Ok(()));
        assert_eq!(state.selected_id(), None);
    }

    #[test]
    fn test_number_list_add_value() {
        let mut list = NumberList::default();
        assert_eq!(list.add_value(3), Ok(6));
        assert_eq!(list.values(), &[1, 2, 3, 6]);
    }

    #[test]
    fn test_number_list_empty_seed() {
        let mut list = NumberList::from_values(Vec::new());
        assert_eq!(list.add_value(3), Ok(3));
        assert_eq!(list.values(), &[3]);
    }

    #[test]
    fn test_next_value_overflow() {
        assert_eq!(next_value(&[i64::MAX], 1), Err(ListError::Overflow));
    }
}
