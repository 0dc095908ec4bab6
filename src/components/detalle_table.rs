//! Detalle Table Component
//!
//! The formset table plus the hidden management count, which is a
//! projection of the Collection's length.

use leptos::prelude::*;

use crate::formset;
use crate::store::{use_orden_store, OrdenFormStateStoreFields};

use super::DetalleRow;

/// Table of detalle rows with the TOTAL_FORMS management field
#[component]
pub fn DetalleTable() -> impl IntoView {
    let store = use_orden_store();

    view! {
        <input
            type="hidden"
            name=formset::TOTAL_FORMS_NAME
            id=formset::TOTAL_FORMS_ID
            prop:value=move || store.detalles().get().len().to_string()
        />
        <table class="table" id="detalles-table">
            <thead>
                <tr>
                    <th>"Producto"</th>
                    <th>"Cantidad"</th>
                    <th>"Precio unitario"</th>
                    <th>"Subtotal"</th>
                    <th>"Eliminar"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    (0..store.detalles().get().len())
                        .map(|index| view! { <DetalleRow index=index /> })
                        .collect_view()
                }}
            </tbody>
        </table>
    }
}
