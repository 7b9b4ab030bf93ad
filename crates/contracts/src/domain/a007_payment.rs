use serde::{Deserialize, Serialize};

use crate::shared::validation;

pub const PAYMENT_METHODS: [&str; 3] = ["Efectivo", "Tarjeta", "Transferencia"];

/// Payment against an invoice, as served by `Pago/*`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    #[serde(rename = "idPago")]
    pub id: i32,
    #[serde(rename = "idFactura")]
    pub invoice_id: i32,
    #[serde(rename = "nombreCliente")]
    pub client_name: String,
    #[serde(rename = "monto")]
    pub amount: f64,
    #[serde(rename = "fechaPago")]
    pub payment_date: String,
    #[serde(rename = "metodoPago")]
    pub method: String,
}

impl Default for Payment {
    fn default() -> Self {
        Self {
            id: 0,
            invoice_id: 0,
            client_name: String::new(),
            amount: 0.0,
            payment_date: String::new(),
            method: PAYMENT_METHODS[0].to_string(),
        }
    }
}

impl Payment {
    pub fn validate(&self) -> Result<(), String> {
        if self.invoice_id == 0 {
            return Err("Debe seleccionar una factura".to_string());
        }
        if self.amount <= 0.0 {
            return Err("El monto debe ser mayor a cero".to_string());
        }
        validation::parse_date(&self.payment_date, "fecha de pago")?;
        if !PAYMENT_METHODS.contains(&self.method.as_str()) {
            return Err("El metodo de pago no es valido".to_string());
        }
        Ok(())
    }
}
