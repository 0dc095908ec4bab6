//! Orden Total Component
//!
//! Live total of the order: sum of subtotals of rows not marked for
//! deletion, mirroring the server-side totals calculation.

use leptos::prelude::*;

use crate::formset;
use crate::store::{use_orden_store, OrdenFormStateStoreFields};

#[component]
pub fn OrdenTotal() -> impl IntoView {
    let store = use_orden_store();

    view! {
        <p class="orden-total">
            "Total: "
            {move || formset::format_monto(formset::total_orden(&store.detalles().get()))}
        </p>
    }
}
