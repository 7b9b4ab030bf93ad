use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Staff member as served by `Empleado/*`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "idEmpleado")]
    pub id: i32,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "sueldo")]
    pub salary: f64,
}

impl Employee {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.full_name, "nombre completo")?;
        validation::required(&self.document, "documento")?;
        validation::phone(&self.phone, "telefono")?;
        validation::email(&self.email, "correo")?;
        validation::non_negative(self.salary, "sueldo")?;
        Ok(())
    }
}
