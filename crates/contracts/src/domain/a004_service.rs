use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Extra service (breakfast, laundry, ...) as served by `Servicio/*`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "idServicio")]
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "precio")]
    pub price: f64,
}

impl Service {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.name, "nombre")?;
        validation::non_negative(self.price, "precio")?;
        Ok(())
    }
}
