use contracts::domain::a003_room::{OccupiedRange, Room};

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Room>, String> {
    http::get_json("/api/Habitacion/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Room, String> {
    http::get_json(&format!("/api/Habitacion/Obtener/{}", id)).await
}

pub async fn create(room: &Room) -> Result<(), String> {
    http::post_unit("/api/Habitacion/Nuevo", room).await
}

pub async fn update(room: &Room) -> Result<(), String> {
    http::put_unit("/api/Habitacion/Editar", room).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Habitacion/Eliminar/{}", id)).await
}

/// Occupied date ranges of one room, for the occupancy report.
pub async fn fetch_occupied_ranges(id: i32) -> Result<Vec<OccupiedRange>, String> {
    http::get_json(&format!("/api/Habitacion/FechasOcupadas/{}", id)).await
}
