//! Formset Utilities
//!
//! Pure logic for the detalle formset: field addressing, amount
//! parsing/formatting and collection operations. No DOM access, so
//! everything here is testable natively.

use crate::models::DetalleForm;

/// Formset prefix used by the server-side renderer
pub const PREFIX: &str = "form";

/// Management field holding the authoritative row count
pub const TOTAL_FORMS_NAME: &str = "form-TOTAL_FORMS";
pub const TOTAL_FORMS_ID: &str = "id_form-TOTAL_FORMS";

/// Submitted field name for `(index, field)`, e.g. "form-0-cantidad"
pub fn field_name(index: usize, field: &str) -> String {
    format!("{}-{}-{}", PREFIX, index, field)
}

/// Element id for `(index, field)`, e.g. "id_form-0-cantidad"
pub fn field_id(index: usize, field: &str) -> String {
    format!("id_{}", field_name(index, field))
}

/// Lenient numeric parse: reads the leading numeric prefix, so "1.5x"
/// counts as 1.5; empty or non-numeric input counts as 0
pub fn parse_monto(raw: &str) -> f64 {
    let valor = raw.trim();
    if let Ok(parsed) = valor.parse::<f64>() {
        return parsed;
    }
    numeric_prefix(valor).parse().unwrap_or(0.0)
}

/// Longest prefix of `valor` shaped like a decimal number
fn numeric_prefix(valor: &str) -> &str {
    let bytes = valor.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if seen_digit {
        &valor[..end]
    } else {
        ""
    }
}

/// Format an amount with exactly 2 decimal places
pub fn format_monto(valor: f64) -> String {
    format!("{:.2}", valor)
}

/// Subtotal string for a quantity/unit-price pair
pub fn subtotal(cantidad: &str, precio_unitario: &str) -> String {
    format_monto(parse_monto(cantidad) * parse_monto(precio_unitario))
}

/// Rewrite one row's derived subtotal from its current inputs
pub fn recompute_subtotal(detalle: &mut DetalleForm) {
    detalle.subtotal = subtotal(&detalle.cantidad, &detalle.precio_unitario);
}

/// Recompute every row. Safe to run on server-rendered rows that already
/// carry correct subtotals.
pub fn recompute_subtotales(detalles: &mut [DetalleForm]) {
    for detalle in detalles {
        recompute_subtotal(detalle);
    }
}

/// Append a blank row. The new row's index is the previous length, so
/// existing indices never move and the contiguous 0..len numbering holds.
/// Returns the new row's index.
pub fn add_detalle(detalles: &mut Vec<DetalleForm>) -> usize {
    let index = detalles.len();
    detalles.push(DetalleForm::default());
    index
}

/// Live order total: sum of subtotals of rows not marked for deletion
pub fn total_orden(detalles: &[DetalleForm]) -> f64 {
    detalles
        .iter()
        .filter(|d| !d.delete)
        .map(|d| parse_monto(&d.subtotal))
        .sum()
}
