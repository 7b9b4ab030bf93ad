use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Role record as served by `Rol/*`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "idRol")]
    pub id: i32,
    #[serde(rename = "nombreRol")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
}

impl Role {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.name, "nombre del rol")?;
        Ok(())
    }
}
