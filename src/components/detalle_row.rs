//! Detalle Row Component
//!
//! One line item: producto select, cantidad/precio inputs, derived
//! subtotal and the DELETE flag. Field names and ids are derived from
//! the row index at render time.

use leptos::prelude::*;

use crate::formset;
use crate::store::{
    store_set_cantidad, store_set_delete, store_set_precio, store_set_producto, use_orden_store,
    OrdenFormStateStoreFields,
};

/// A single detalle row in the formset table
#[component]
pub fn DetalleRow(index: usize) -> impl IntoView {
    let store = use_orden_store();

    let detalle = move || {
        store
            .detalles()
            .get()
            .get(index)
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <tr class=move || {
            if detalle().delete { "detalle-form eliminado" } else { "detalle-form" }
        }>
            <td>
                <select
                    name=formset::field_name(index, "producto")
                    id=formset::field_id(index, "producto")
                    prop:value=move || detalle().producto
                    on:change=move |ev| store_set_producto(&store, index, event_target_value(&ev))
                >
                    <option value="">"---------"</option>
                    {move || {
                        store
                            .productos()
                            .get()
                            .iter()
                            .map(|p| {
                                view! {
                                    <option value=p.id.to_string()>{p.nombre.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </td>
            <td>
                <input
                    type="number"
                    min="1"
                    name=formset::field_name(index, "cantidad")
                    id=formset::field_id(index, "cantidad")
                    prop:value=move || detalle().cantidad
                    on:input=move |ev| store_set_cantidad(&store, index, event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    name=formset::field_name(index, "precio_unitario")
                    id=formset::field_id(index, "precio_unitario")
                    prop:value=move || detalle().precio_unitario
                    on:input=move |ev| store_set_precio(&store, index, event_target_value(&ev))
                />
            </td>
            <td>
                <input
                    type="text"
                    readonly=true
                    name=formset::field_name(index, "subtotal")
                    id=formset::field_id(index, "subtotal")
                    prop:value=move || detalle().subtotal
                />
            </td>
            <td>
                <input
                    type="checkbox"
                    name=formset::field_name(index, "DELETE")
                    id=formset::field_id(index, "DELETE")
                    prop:checked=move || detalle().delete
                    on:change=move |ev| store_set_delete(&store, index, event_target_checked(&ev))
                />
            </td>
        </tr>
    }
}
