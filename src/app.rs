//! Orden Compra Form App
//!
//! Root component: builds the store from the server-embedded payload and
//! renders the detalle formset.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap;
use crate::components::{AddDetalleButton, DetalleTable, OrdenTotal};
use crate::store::{OrdenFormState, OrdenStore};

#[component]
pub fn App() -> impl IntoView {
    let datos = bootstrap::read_bootstrap();
    let detalles = bootstrap::initial_detalles(datos.detalles);

    web_sys::console::log_1(
        &format!(
            "[ORDEN] Loaded {} detalles, {} productos",
            detalles.len(),
            datos.productos.len()
        )
        .into(),
    );

    let store: OrdenStore = Store::new(OrdenFormState {
        detalles,
        productos: datos.productos,
    });
    provide_context(store);

    view! {
        <div class="orden-detalles">
            <DetalleTable />
            <AddDetalleButton />
            <OrdenTotal />
        </div>
    }
}
