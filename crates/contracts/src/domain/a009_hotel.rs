use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Hotel master data. A single record; the settings screen loads id 1 and
/// only ever issues `Editar`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hotel {
    #[serde(rename = "idHotel")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
}

impl Hotel {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.name, "nombre")?;
        validation::required(&self.address, "direccion")?;
        validation::phone(&self.phone, "telefono")?;
        validation::email(&self.email, "correo")?;
        Ok(())
    }
}
