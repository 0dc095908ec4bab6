//! Bootstrap Payload
//!
//! Reads the initial order data the server embeds in the page.

use crate::formset;
use crate::models::{DetalleForm, OrdenBootstrap};

/// Element id of the server-embedded JSON payload
pub const BOOTSTRAP_ID: &str = "orden-detalles-data";

/// Parse the embedded payload. None on malformed JSON.
pub fn parse_bootstrap(raw: &str) -> Option<OrdenBootstrap> {
    serde_json::from_str(raw).ok()
}

/// Read the payload from the current document. A missing element or
/// malformed content degrades to the empty payload.
pub fn read_bootstrap() -> OrdenBootstrap {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ID))
        .and_then(|el| el.text_content())
        .and_then(|raw| parse_bootstrap(&raw))
        .unwrap_or_default()
}

/// Rows to load at startup: the payload's detalles with subtotals
/// recomputed, or one blank row when the payload carries none (the
/// server renders one blank extra form).
pub fn initial_detalles(detalles: Vec<DetalleForm>) -> Vec<DetalleForm> {
    let mut detalles = detalles;
    if detalles.is_empty() {
        detalles.push(DetalleForm::default());
    }
    formset::recompute_subtotales(&mut detalles);
    detalles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_payload() {
        let raw = r#"{
            "productos": [{"id": 1, "nombre": "Tornillos"}],
            "detalles": [{"producto": "1", "cantidad": "3", "precio_unitario": "2.50"}]
        }"#;
        let datos = parse_bootstrap(raw).unwrap();
        assert_eq!(datos.productos.len(), 1);
        assert_eq!(datos.productos[0].nombre, "Tornillos");
        assert_eq!(datos.detalles.len(), 1);
        assert_eq!(datos.detalles[0].cantidad, "3");
    }

    #[test]
    fn test_parse_empty_object() {
        let datos = parse_bootstrap("{}").unwrap();
        assert!(datos.productos.is_empty());
        assert!(datos.detalles.is_empty());
    }

    #[test]
    fn test_parse_malformed_is_none() {
        assert!(parse_bootstrap("not json").is_none());
        assert!(parse_bootstrap("").is_none());
    }

    #[test]
    fn test_initial_detalles_empty_payload_seeds_blank_row() {
        let detalles = initial_detalles(Vec::new());
        assert_eq!(detalles, vec![DetalleForm::default()]);
    }

    #[test]
    fn test_initial_detalles_recomputes_server_rows() {
        let detalles = initial_detalles(vec![DetalleForm {
            cantidad: "3".to_string(),
            precio_unitario: "2.50".to_string(),
            subtotal: "99.99".to_string(),
            ..DetalleForm::default()
        }]);
        assert_eq!(detalles.len(), 1);
        assert_eq!(detalles[0].subtotal, "7.50");
    }
}
