use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Room states used by the API. The list screen renders them as badges.
pub const ROOM_STATE_AVAILABLE: &str = "Disponible";
pub const ROOM_STATE_OCCUPIED: &str = "Ocupada";
pub const ROOM_STATE_MAINTENANCE: &str = "Mantenimiento";

pub const ROOM_STATES: [&str; 3] = [
    ROOM_STATE_AVAILABLE,
    ROOM_STATE_OCCUPIED,
    ROOM_STATE_MAINTENANCE,
];

/// Room as served by `Habitacion/*`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "idHabitacion")]
    pub id: i32,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precioNoche")]
    pub price_per_night: f64,
    #[serde(rename = "estado")]
    pub state: String,
}

impl Default for Room {
    fn default() -> Self {
        Self {
            id: 0,
            number: String::new(),
            description: String::new(),
            price_per_night: 0.0,
            state: ROOM_STATE_AVAILABLE.to_string(),
        }
    }
}

impl Room {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.number, "numero")?;
        validation::non_negative(self.price_per_night, "precio por noche")?;
        if !ROOM_STATES.contains(&self.state.as_str()) {
            return Err("El estado de la habitacion no es valido".to_string());
        }
        Ok(())
    }
}

/// One occupied interval of a room, from `Habitacion/FechasOcupadas/{id}`.
/// Dates travel as `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupiedRange {
    #[serde(rename = "fechaInicio")]
    pub start_date: String,
    #[serde(rename = "fechaFin")]
    pub end_date: String,
}

impl OccupiedRange {
    /// Nights covered by the range; zero when the dates do not parse.
    pub fn nights(&self) -> i64 {
        let parse = |s: &str| chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").ok();
        match (parse(&self.start_date), parse(&self.end_date)) {
            (Some(desde), Some(hasta)) => (hasta - desde).num_days().max(0),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nights_counts_days_between() {
        let range = OccupiedRange {
            start_date: "2026-08-01".to_string(),
            end_date: "2026-08-04".to_string(),
        };
        assert_eq!(range.nights(), 3);
    }

    #[test]
    fn nights_is_zero_for_bad_input() {
        let range = OccupiedRange {
            start_date: "???".to_string(),
            end_date: "2026-08-04".to_string(),
        };
        assert_eq!(range.nights(), 0);
    }

    #[test]
    fn unknown_state_is_rejected() {
        let room = Room {
            number: "101".to_string(),
            state: "Cerrada".to_string(),
            ..Room::default()
        };
        assert!(room.validate().is_err());
    }
}
