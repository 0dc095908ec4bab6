//! Order Form State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The detalle
//! Collection lives here; its length is the authoritative form count.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::formset;
use crate::models::{DetalleForm, Producto};

/// State of the orden form
#[derive(Clone, Debug, Default, Store)]
pub struct OrdenFormState {
    /// Ordered line items; a row's index is its formset index
    pub detalles: Vec<DetalleForm>,
    /// Product catalog for the producto select
    pub productos: Vec<Producto>,
}

/// Type alias for the store
pub type OrdenStore = Store<OrdenFormState>;

/// Get the orden store from context
pub fn use_orden_store() -> OrdenStore {
    expect_context::<OrdenStore>()
}

// ========================
// Store Helper Functions
// ========================

// The write guard borrows the subfield, so the subfield has to be bound
// before the guard.

/// Append a blank detalle row
pub fn store_add_detalle(store: &OrdenStore) {
    let field = store.detalles();
    formset::add_detalle(&mut field.write());
}

/// Set a row's producto
pub fn store_set_producto(store: &OrdenStore, index: usize, value: String) {
    let field = store.detalles();
    let mut detalles = field.write();
    if let Some(detalle) = detalles.get_mut(index) {
        detalle.producto = value;
    }
}

/// Set a row's cantidad and recompute its subtotal
pub fn store_set_cantidad(store: &OrdenStore, index: usize, value: String) {
    let field = store.detalles();
    let mut detalles = field.write();
    if let Some(detalle) = detalles.get_mut(index) {
        detalle.cantidad = value;
        formset::recompute_subtotal(detalle);
    }
}

/// Set a row's precio unitario and recompute its subtotal
pub fn store_set_precio(store: &OrdenStore, index: usize, value: String) {
    let field = store.detalles();
    let mut detalles = field.write();
    if let Some(detalle) = detalles.get_mut(index) {
        detalle.precio_unitario = value;
        formset::recompute_subtotal(detalle);
    }
}

/// Mark or unmark a row for deletion. The row stays in the Collection.
pub fn store_set_delete(store: &OrdenStore, index: usize, marked: bool) {
    let field = store.detalles();
    let mut detalles = field.write();
    if let Some(detalle) = detalles.get_mut(index) {
        detalle.delete = marked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetalleForm;

    fn make_store(detalles: Vec<DetalleForm>) -> OrdenStore {
        Store::new(OrdenFormState {
            detalles,
            productos: Vec::new(),
        })
    }

    #[test]
    fn test_store_add_detalle_appends_blank_row() {
        let store = make_store(vec![DetalleForm::default()]);
        store_add_detalle(&store);
        let detalles = store.detalles().get();
        assert_eq!(detalles.len(), 2);
        assert_eq!(detalles[1], DetalleForm::default());
    }

    #[test]
    fn test_store_set_cantidad_recomputes_subtotal() {
        let store = make_store(vec![DetalleForm {
            precio_unitario: "2.50".to_string(),
            ..DetalleForm::default()
        }]);
        store_set_cantidad(&store, 0, "3".to_string());
        let detalles = store.detalles().get();
        assert_eq!(detalles[0].cantidad, "3");
        assert_eq!(detalles[0].subtotal, "7.50");
    }

    #[test]
    fn test_store_set_delete_keeps_row_in_place() {
        let store = make_store(vec![DetalleForm::default(), DetalleForm::default()]);
        store_set_delete(&store, 0, true);
        let detalles = store.detalles().get();
        assert_eq!(detalles.len(), 2);
        assert!(detalles[0].delete);
        assert!(!detalles[1].delete);
    }

    #[test]
    fn test_store_set_out_of_range_is_noop() {
        let store = make_store(vec![DetalleForm::default()]);
        store_set_cantidad(&store, 5, "9".to_string());
        store_set_delete(&store, 5, true);
        let detalles = store.detalles().get();
        assert_eq!(detalles.len(), 1);
        assert_eq!(detalles[0], DetalleForm::default());
    }
}
