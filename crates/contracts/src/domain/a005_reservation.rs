use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Reservation as served by `Reserva/*`.
///
/// Carries the client's name and the room number denormalized for display,
/// alongside the foreign keys the API actually persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "idReserva")]
    pub id: i32,
    #[serde(rename = "idCliente")]
    pub client_id: i32,
    #[serde(rename = "nombreCliente")]
    pub client_name: String,
    #[serde(rename = "idHabitacion")]
    pub room_id: i32,
    #[serde(rename = "numeroHabitacion")]
    pub room_number: String,
    #[serde(rename = "fechaInicio")]
    pub start_date: String,
    #[serde(rename = "fechaFin")]
    pub end_date: String,
    #[serde(rename = "cantidadPersonas")]
    pub guest_count: i32,
    #[serde(rename = "montoTotal")]
    pub total_amount: f64,
}

impl Reservation {
    /// The date-ordering check is client-side comfort only; the API is the
    /// authority on availability and overlaps.
    pub fn validate(&self) -> Result<(), String> {
        if self.client_id == 0 {
            return Err("Debe seleccionar un cliente".to_string());
        }
        if self.room_id == 0 {
            return Err("Debe seleccionar una habitacion".to_string());
        }
        validation::date_range(&self.start_date, &self.end_date)?;
        if self.guest_count <= 0 {
            return Err("La cantidad de personas debe ser mayor a cero".to_string());
        }
        validation::non_negative(self.total_amount, "monto total")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Reservation {
        Reservation {
            client_id: 3,
            room_id: 7,
            start_date: "2026-08-10".to_string(),
            end_date: "2026-08-12".to_string(),
            guest_count: 2,
            total_amount: 240.0,
            ..Reservation::default()
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut r = draft();
        r.end_date = "2026-08-01".to_string();
        assert!(r.validate().is_err());
    }

    #[test]
    fn missing_foreign_keys_are_rejected() {
        let mut r = draft();
        r.client_id = 0;
        assert!(r.validate().is_err());
    }
}
