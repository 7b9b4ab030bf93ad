use contracts::domain::a004_service::Service;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Service>, String> {
    http::get_json("/api/Servicio/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Service, String> {
    http::get_json(&format!("/api/Servicio/Obtener/{}", id)).await
}

pub async fn create(service: &Service) -> Result<(), String> {
    http::post_unit("/api/Servicio/Nuevo", service).await
}

pub async fn update(service: &Service) -> Result<(), String> {
    http::put_unit("/api/Servicio/Editar", service).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Servicio/Eliminar/{}", id)).await
}
