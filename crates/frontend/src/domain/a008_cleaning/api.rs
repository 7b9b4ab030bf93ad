use contracts::domain::a008_cleaning::Cleaning;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Cleaning>, String> {
    http::get_json("/api/Limpieza/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Cleaning, String> {
    http::get_json(&format!("/api/Limpieza/Obtener/{}", id)).await
}

pub async fn create(cleaning: &Cleaning) -> Result<(), String> {
    http::post_unit("/api/Limpieza/Nuevo", cleaning).await
}

pub async fn update(cleaning: &Cleaning) -> Result<(), String> {
    http::put_unit("/api/Limpieza/Editar", cleaning).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Limpieza/Eliminar/{}", id)).await
}
