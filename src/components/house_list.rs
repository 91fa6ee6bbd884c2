//! House List Component
//!
//! Table of houses currently on the market, plus the "Add" button.

use std::sync::{Arc, Mutex};

use leptos::prelude::*;

use crate::components::{HouseRow, LoadingIndicator};
use crate::controller::{LoadPhase, HOUSE_ADD_INCREMENT};
use crate::memo::{RowCache, RowView};
use crate::navigation::{use_navigation, NavTarget};
use crate::store::{store_add_house, store_select_house, use_session_store, SessionStateStoreFields};

#[component]
pub fn HouseList() -> impl IntoView {
    let store = use_session_store();
    let nav = use_navigation();
    let cache = Arc::new(Mutex::new(RowCache::new()));

    // Only rows whose record changed are rendered again
    let rows = Memo::new(move |_| {
        let houses = store.listing().read().houses().to_vec();
        match cache.lock() {
            Ok(mut cache) => cache.rows(&houses),
            Err(_) => houses.iter().map(RowView::render).collect(),
        }
    });
    let phase = move || store.listing().read().phase();

    let select_house = Callback::new(move |id: u32| {
        if store_select_house(&store, id).is_ok() {
            let house = store.listing().read().selected_house().cloned();
            nav.navigate(NavTarget::House, house);
        }
    });

    let can_add = move || store.listing().read().can_add();

    let add_house = move |_| match store_add_house(&store, HOUSE_ADD_INCREMENT) {
        Ok(id) => web_sys::console::log_1(&format!("[HOUSES] Added house {}", id).into()),
        Err(e) => web_sys::console::log_1(&format!("[HOUSES] Add failed: {}", e).into()),
    };

    view! {
        <div class="row mb-2">
            <h5 class="themeFontColor text-center">"Houses currently on the market"</h5>
        </div>
        {move || match phase() {
            LoadPhase::Pending => Some(view! { <LoadingIndicator message="Loading houses..." /> }.into_any()),
            LoadPhase::Failed => Some(view! {
                <p class="load-error">
                    "Could not load houses: "
                    {move || store.listing().read().last_error().unwrap_or_default().to_string()}
                </p>
            }.into_any()),
            _ => None,
        }}
        <table class="table table-hover">
            <thead>
                <tr>
                    <th>"Address"</th>
                    <th>"Country"</th>
                    <th>"Asking Price"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || rows.get()
                    key=|row| row.clone()
                    children=move |row| view! { <HouseRow row=row on_select=select_house /> }
                />
            </tbody>
        </table>
        <button class="btn btn-primary" disabled=move || !can_add() on:click=add_house>"Add"</button>
    }
}
