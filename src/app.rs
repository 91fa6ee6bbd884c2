//! Globomantics Frontend App
//!
//! Root component. Owns the view session: the session store, the navigation
//! handle and the auth client, all provided via context.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::auth::AuthClient;
use crate::commands;
use crate::components::{Authenticator, Banner, ComponentPicker};
use crate::navigation::{NavTarget, NavigationHandle};
use crate::store::{store_apply_fetch, store_clear_selection, SessionGuard, SessionState, SessionStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(SessionState::default());
    let nav = NavigationHandle::new();
    let auth = AuthClient::new();

    provide_context(store);
    provide_context(nav);
    provide_context(auth);

    // Late fetch results must not touch a torn-down session
    let guard = SessionGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.dispose()
    });

    // One fetch per mount
    if store.listing().write().begin_load() {
        web_sys::console::log_1(&"[APP] Loading houses".into());
        spawn_local(async move {
            let result = commands::list_houses().await;
            store_apply_fetch(&store, &guard, result);
        });
    }

    auth.refresh();

    let nav_class = move |target: NavTarget| {
        if nav.current() == target { "nav-link active" } else { "nav-link" }
    };

    view! {
        <div class="container">
            <Banner>"Providing houses all over the world."</Banner>
            <nav class="app-nav">
                <button class=move || nav_class(NavTarget::Home) on:click=move |_| {
                    store_clear_selection(&store);
                    nav.navigate(NavTarget::Home, None);
                }>
                    "Houses"
                </button>
                <button class=move || nav_class(NavTarget::Numbers) on:click=move |_| nav.navigate(NavTarget::Numbers, None)>
                    "Numbers"
                </button>
            </nav>
            <Authenticator>
                <ComponentPicker />
            </Authenticator>
        </div>
    }
}
