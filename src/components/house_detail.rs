//! House Detail Component
//!
//! Shows the house carried by navigation. A payload that is no longer the
//! list's selection renders the same as no selection.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::format::{format_price, photo_src};
use crate::navigation::{use_navigation, NavTarget};
use crate::store::{store_clear_selection, use_session_store, SessionStateStoreFields};

#[component]
pub fn HouseDetail() -> impl IntoView {
    let store = use_session_store();
    let nav = use_navigation();
    let (description, set_description) = signal::<Option<String>>(None);

    let house = move || nav.state.get().detail_house(&store.listing().read());

    // Description comes from the backend record; houses added locally have none
    Effect::new(move |_| {
        let Some(id) = house().map(|h| h.id) else {
            return;
        };
        set_description.set(None);
        spawn_local(async move {
            match commands::get_house(id).await {
                Ok(Some(found)) => set_description.set(found.description),
                Ok(None) => {}
                Err(e) => web_sys::console::log_1(&format!("[HOUSES] Detail load failed: {}", e).into()),
            }
        });
    });

    let back = move |_| {
        store_clear_selection(&store);
        nav.navigate(NavTarget::Home, None);
    };

    view! {
        {move || match house() {
            Some(h) => view! {
                <div class="row">
                    <div class="col-6">
                        <div class="row">
                            <img class="img-fluid" src=photo_src(h.photo.as_deref()) alt="House pic" />
                        </div>
                    </div>
                    <div class="col-6">
                        <div class="row mt-2">
                            <h5 class="col-12">{h.country.clone()}</h5>
                        </div>
                        <div class="row">
                            <h3 class="col-12">{h.address.clone()}</h3>
                        </div>
                        <div class="row">
                            <h2 class="themeFontColor col-12">{format_price(h.price)}</h2>
                        </div>
                        <div class="row">
                            <div class="col-12 mt-3">{move || description.get().unwrap_or_default()}</div>
                        </div>
                    </div>
                </div>
            }.into_any(),
            None => view! { <p class="no-selection">"No house selected."</p> }.into_any(),
        }}
        <button class="btn btn-secondary mt-3" on:click=back>"Back"</button>
    }
}
