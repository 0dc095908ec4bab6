//! Frontend Models
//!
//! Data structures matching the server-side form contract.

use serde::{Deserialize, Serialize};

/// One line item of the purchase order ("detalle").
///
/// Values are kept as the raw strings the user typed so that unparsable
/// input is preserved in the field while subtotals treat it as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetalleForm {
    /// Selected product id ("" = placeholder option)
    #[serde(default)]
    pub producto: String,
    #[serde(default = "default_cantidad")]
    pub cantidad: String,
    #[serde(default = "default_monto")]
    pub precio_unitario: String,
    /// Derived: cantidad * precio_unitario, 2 decimal places
    #[serde(default = "default_monto")]
    pub subtotal: String,
    /// Marked for deletion on submit; the row stays rendered
    #[serde(default, rename = "DELETE")]
    pub delete: bool,
}

impl Default for DetalleForm {
    fn default() -> Self {
        Self {
            producto: String::new(),
            cantidad: default_cantidad(),
            precio_unitario: default_monto(),
            subtotal: default_monto(),
            delete: false,
        }
    }
}

fn default_cantidad() -> String {
    "1".to_string()
}

fn default_monto() -> String {
    "0.00".to_string()
}

/// Catalog entry for the producto select (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producto {
    pub id: u32,
    pub nombre: String,
}

/// Initial payload embedded by the server in the page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrdenBootstrap {
    #[serde(default)]
    pub productos: Vec<Producto>,
    #[serde(default)]
    pub detalles: Vec<DetalleForm>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detalle_defaults() {
        let d = DetalleForm::default();
        assert_eq!(d.producto, "");
        assert_eq!(d.cantidad, "1");
        assert_eq!(d.precio_unitario, "0.00");
        assert_eq!(d.subtotal, "0.00");
        assert!(!d.delete);
    }

    #[test]
    fn test_detalle_missing_keys_use_defaults() {
        let d: DetalleForm = serde_json::from_str(r#"{"producto":"7"}"#).unwrap();
        assert_eq!(d.producto, "7");
        assert_eq!(d.cantidad, "1");
        assert_eq!(d.precio_unitario, "0.00");
        assert!(!d.delete);
    }

    #[test]
    fn test_delete_flag_uses_formset_key() {
        let d: DetalleForm = serde_json::from_str(r#"{"DELETE":true}"#).unwrap();
        assert!(d.delete);
    }
}
