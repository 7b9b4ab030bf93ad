use serde::{Deserialize, Serialize};

use crate::shared::validation;

/// Back-office account as served by `Usuario/*`. The password field is only
/// populated on the way out (create/update); lists return it empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "idUsuario")]
    pub id: i32,
    #[serde(rename = "nombreUsuario")]
    pub username: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "clave")]
    pub password: String,
    #[serde(rename = "idRol")]
    pub role_id: i32,
    #[serde(rename = "nombreRol")]
    pub role_name: String,
}

impl User {
    pub fn validate(&self) -> Result<(), String> {
        validation::required(&self.username, "nombre de usuario")?;
        validation::email(&self.email, "correo")?;
        // Existing accounts may keep their password by leaving the field blank.
        if self.id == 0 {
            validation::required(&self.password, "clave")?;
        }
        if self.role_id == 0 {
            return Err("Debe seleccionar un rol".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_requires_password() {
        let u = User {
            username: "mrojas".to_string(),
            email: "mrojas@hotel.com".to_string(),
            role_id: 2,
            ..User::default()
        };
        assert!(u.validate().is_err());
    }

    #[test]
    fn existing_user_may_keep_password() {
        let u = User {
            id: 8,
            username: "mrojas".to_string(),
            email: "mrojas@hotel.com".to_string(),
            role_id: 2,
            ..User::default()
        };
        assert!(u.validate().is_ok());
    }
}
