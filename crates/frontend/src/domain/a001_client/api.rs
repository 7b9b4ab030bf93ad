use contracts::domain::a001_client::Client;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Client>, String> {
    http::get_json("/api/Cliente/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Client, String> {
    http::get_json(&format!("/api/Cliente/Obtener/{}", id)).await
}

pub async fn create(client: &Client) -> Result<(), String> {
    http::post_unit("/api/Cliente/Nuevo", client).await
}

pub async fn update(client: &Client) -> Result<(), String> {
    http::put_unit("/api/Cliente/Editar", client).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Cliente/Eliminar/{}", id)).await
}
