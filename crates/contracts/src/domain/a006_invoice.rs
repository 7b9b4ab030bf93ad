use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Invoice as served by `Factura/*`. One invoice per reservation; the API
/// exposes `ExistePorReserva` so the form can pre-check before creating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "idFactura")]
    pub id: i32,
    #[serde(rename = "idReserva")]
    pub reservation_id: i32,
    #[serde(rename = "nombreCliente")]
    pub client_name: String,
    #[serde(rename = "fechaEmision")]
    pub issue_date: String,
    #[serde(rename = "total")]
    pub total: f64,
    #[serde(rename = "pagada")]
    pub paid: bool,
}

impl Invoice {
    pub fn validate(&self) -> Result<(), String> {
        if self.reservation_id == 0 {
            return Err("Debe seleccionar una reserva".to_string());
        }
        validation::parse_date(&self.issue_date, "fecha de emision")?;
        validation::non_negative(self.total, "total")?;
        Ok(())
    }
}

/// Response of `Factura/CalcularTotal/{idReserva}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceTotal {
    #[serde(rename = "total")]
    pub total: f64,
}

/// Response of `Factura/ExistePorReserva/{idReserva}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceExists {
    #[serde(rename = "existe")]
    pub exists: bool,
}
