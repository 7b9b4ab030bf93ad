use contracts::system::users::User;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<User>, String> {
    http::get_json("/api/Usuario/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<User, String> {
    http::get_json(&format!("/api/Usuario/Obtener/{}", id)).await
}

pub async fn create(user: &User) -> Result<(), String> {
    http::post_unit("/api/Usuario/Nuevo", user).await
}

pub async fn update(user: &User) -> Result<(), String> {
    http::put_unit("/api/Usuario/Editar", user).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Usuario/Eliminar/{}", id)).await
}
