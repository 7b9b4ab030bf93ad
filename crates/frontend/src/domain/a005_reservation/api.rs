use contracts::domain::a005_reservation::Reservation;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Reservation>, String> {
    http::get_json("/api/Reserva/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Reservation, String> {
    http::get_json(&format!("/api/Reserva/Obtener/{}", id)).await
}

pub async fn create(reservation: &Reservation) -> Result<(), String> {
    http::post_unit("/api/Reserva/Nuevo", reservation).await
}

pub async fn update(reservation: &Reservation) -> Result<(), String> {
    http::put_unit("/api/Reserva/Editar", reservation).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Reserva/Eliminar/{}", id)).await
}
