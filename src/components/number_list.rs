//! Number List Component
//!
//! The "Add Item" demo: each click appends `max + 3`.

use leptos::prelude::*;

use crate::controller::NUMBER_ADD_INCREMENT;
use crate::store::{store_add_number, use_session_store, SessionStateStoreFields};

#[component]
pub fn NumberList() -> impl IntoView {
    let store = use_session_store();
    let values = move || store.numbers().read().values().to_vec();

    let add_value = move |_| {
        if let Err(e) = store_add_number(&store, NUMBER_ADD_INCREMENT) {
            web_sys::console::log_1(&format!("[NUMBERS] {}", e).into());
        }
    };

    view! {
        <ul class="number-list">
            <button on:click=add_value>"Add Item"</button>
            <For
                each=values
                key=|value| *value
                children=|value| view! { <li>{value}</li> }
            />
        </ul>
    }
}
