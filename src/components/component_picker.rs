//! Component Picker
//!
//! Chooses the page for the current navigation target.

use leptos::prelude::*;

use crate::components::{HouseDetail, HouseList, NumberList};
use crate::navigation::{use_navigation, NavTarget};

#[component]
pub fn ComponentPicker() -> impl IntoView {
    let nav = use_navigation();

    move || match nav.current() {
        NavTarget::Home => view! { <HouseList /> }.into_any(),
        NavTarget::House => view! { <HouseDetail /> }.into_any(),
        NavTarget::Numbers => view! { <NumberList /> }.into_any(),
    }
}
