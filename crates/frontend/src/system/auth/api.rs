use contracts::system::auth::{LoginRequest, SessionUser};

use crate::shared::http;

/// Sign in with email and password.
pub async fn login(email: String, password: String) -> Result<SessionUser, String> {
    let request = LoginRequest { email, password };
    http::post_json("/api/Usuario/IniciarSesion", &request).await
}
