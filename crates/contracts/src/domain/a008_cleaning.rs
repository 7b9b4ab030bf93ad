use serde::{Deserialize, Serialize};

use crate::shared::validation;

pub const CLEANING_STATE_PENDING: &str = "Pendiente";
pub const CLEANING_STATE_DONE: &str = "Realizada";

pub const CLEANING_STATES: [&str; 2] = [CLEANING_STATE_PENDING, CLEANING_STATE_DONE];

/// Cleaning task as served by `Limpieza/*`. Denormalizes the room number
/// and the assigned employee's name for the list screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cleaning {
    #[serde(rename = "idLimpieza")]
    pub id: i32,
    #[serde(rename = "idHabitacion")]
    pub room_id: i32,
    #[serde(rename = "numeroHabitacion")]
    pub room_number: String,
    #[serde(rename = "idEmpleado")]
    pub employee_id: i32,
    #[serde(rename = "nombreEmpleado")]
    pub employee_name: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "estado")]
    pub state: String,
}

impl Default for Cleaning {
    fn default() -> Self {
        Self {
            id: 0,
            room_id: 0,
            room_number: String::new(),
            employee_id: 0,
            employee_name: String::new(),
            date: String::new(),
            state: CLEANING_STATE_PENDING.to_string(),
        }
    }
}

impl Cleaning {
    pub fn validate(&self) -> Result<(), String> {
        if self.room_id == 0 {
            return Err("Debe seleccionar una habitacion".to_string());
        }
        if self.employee_id == 0 {
            return Err("Debe seleccionar un empleado".to_string());
        }
        validation::parse_date(&self.date, "fecha")?;
        if !CLEANING_STATES.contains(&self.state.as_str()) {
            return Err("El estado de la limpieza no es valido".to_string());
        }
        Ok(())
    }
}
