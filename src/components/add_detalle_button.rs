//! Add Detalle Button Component

use leptos::prelude::*;

use crate::store::{store_add_detalle, use_orden_store};

/// Appends a blank detalle row to the formset
#[component]
pub fn AddDetalleButton() -> impl IntoView {
    let store = use_orden_store();

    view! {
        <button
            type="button"
            id="add-detalle"
            class="add-detalle-btn"
            on:click=move |_| store_add_detalle(&store)
        >
            "Agregar detalle"
        </button>
    }
}
