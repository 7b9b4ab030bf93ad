use serde::{Deserialize, Serialize};

/// Role strings as the API spells them. Route allow-lists compare against
/// these literals.
pub const ROLE_ADMIN: &str = "Administrador";
pub const ROLE_RECEPTIONIST: &str = "Recepcionista";

/// Body of `POST Usuario/IniciarSesion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "clave")]
    pub password: String,
}

/// Successful login response: the pair the client keeps for the tab session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(rename = "nombreUsuario")]
    pub username: String,
    #[serde(rename = "nombreRol")]
    pub role: String,
}
