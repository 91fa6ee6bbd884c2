//! Banner Component

use leptos::prelude::*;

#[component]
pub fn Banner(children: Children) -> impl IntoView {
    view! {
        <header class="row mb-4">
            <div class="col-5">
                <img src="./GloboLogo.png" alt="logo" class="logo" />
            </div>
            <div class="col-7 mt-5 subtitle">{children()}</div>
        </header>
    }
}
