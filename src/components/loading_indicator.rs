use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(into)] message: String) -> impl IntoView {
    view! { <h3 class="loading-indicator">{message}</h3> }
}
