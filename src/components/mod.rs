//! UI Components
//!
//! Leptos components for the detalle formset.

mod add_detalle_button;
mod detalle_row;
mod detalle_table;
mod orden_total;

pub use add_detalle_button::AddDetalleButton;
pub use detalle_row::DetalleRow;
pub use detalle_table::DetalleTable;
pub use orden_total::OrdenTotal;
