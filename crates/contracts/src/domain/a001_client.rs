use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Hotel guest as served by `Cliente/*`. Id 0 marks an unsaved draft.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Client {
    #[serde(rename = "idCliente")]
    pub id: i32,
    #[serde(rename = "nombreCliente")]
    pub first_name: String,
    #[serde(rename = "apellidoCliente")]
    pub last_name: String,
    #[serde(rename = "documento")]
    pub document: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "correo")]
    pub email: String,
}

impl Client {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.first_name, "nombre")?;
        validation::required(&self.last_name, "apellido")?;
        validation::required(&self.document, "documento")?;
        validation::phone(&self.phone, "telefono")?;
        validation::email(&self.email, "correo")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Client {
        Client {
            id: 0,
            first_name: "Ana".to_string(),
            last_name: "Torres".to_string(),
            document: "45128733".to_string(),
            phone: "987654321".to_string(),
            email: "ana@correo.com".to_string(),
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn blank_required_field_fails() {
        let mut c = draft();
        c.first_name = "  ".to_string();
        assert!(c.validate().is_err());
    }

    #[test]
    fn wire_names_are_spanish() {
        let json = serde_json::to_value(draft()).unwrap();
        assert!(json.get("idCliente").is_some());
        assert!(json.get("nombreCliente").is_some());
        assert!(json.get("correo").is_some());
    }
}
