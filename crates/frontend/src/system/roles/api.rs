use contracts::system::roles::Role;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Role>, String> {
    http::get_json("/api/Rol/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Role, String> {
    http::get_json(&format!("/api/Rol/Obtener/{}", id)).await
}

pub async fn create(role: &Role) -> Result<(), String> {
    http::post_unit("/api/Rol/Nuevo", role).await
}

pub async fn update(role: &Role) -> Result<(), String> {
    http::put_unit("/api/Rol/Editar", role).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Rol/Eliminar/{}", id)).await
}
