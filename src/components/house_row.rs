//! House Row Component
//!
//! One table row. Renders a precomputed [`RowView`]; clicking reports the id.

use leptos::prelude::*;

use crate::memo::RowView;

#[component]
pub fn HouseRow(
    row: RowView,
    on_select: Callback<u32>,
) -> impl IntoView {
    let id = row.id;

    view! {
        <tr class="house-row" on:click=move |_| on_select.run(id)>
            <td>{row.address}</td>
            <td>{row.country}</td>
            <td>{row.price_label}</td>
        </tr>
    }
}
