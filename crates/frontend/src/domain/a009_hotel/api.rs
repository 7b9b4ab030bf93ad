use contracts::domain::a009_hotel::Hotel;

use crate::shared::http;

/// The hotel master data is a single record with id 1.
pub async fn fetch() -> Result<Hotel, String> {
    http::get_json("/api/Hotel/Obtener/1").await
}

pub async fn update(hotel: &Hotel) -> Result<(), String> {
    http::put_unit("/api/Hotel/Editar", hotel).await
}
