//! Authenticator Component
//!
//! Gate above the routed content. While the auth status is loading or
//! invalid, only the gate itself is rendered.

use leptos::prelude::*;

use crate::auth::{AuthClient, AuthView};
use crate::components::LoadingIndicator;

#[component]
pub fn Authenticator(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<AuthClient>();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());

    let on_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();
        if address.is_empty() { return; }
        auth.login(address, password.get());
        set_password.set(String::new());
    };

    move || {
        let children = children.clone();
        match AuthView::from_status(&auth.status.get()) {
            AuthView::Loading => view! { <LoadingIndicator message="Loading..." /> }.into_any(),
            AuthView::Greeting { name } => view! {
                <div class="auth-bar">
                    "Hi " {name}
                    <div>
                        <button class="mt-3 btn btn-secondary btn-sm" on:click=move |_| auth.logout()>
                            "Logout"
                        </button>
                    </div>
                </div>
                {children()}
            }.into_any(),
            AuthView::LoginPrompt => view! {
                <form class="login-form" on:submit=on_login>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Login"</button>
                </form>
                {children()}
            }.into_any(),
            AuthView::Error { detail } => view! {
                <div class="auth-error">
                    <h4>"Authentication unavailable"</h4>
                    <p>{detail}</p>
                    <button class="btn btn-secondary btn-sm" on:click=move |_| auth.refresh()>"Retry"</button>
                </div>
            }.into_any(),
        }
    }
}
