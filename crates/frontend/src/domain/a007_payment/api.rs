use contracts::domain::a007_payment::Payment;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Payment>, String> {
    http::get_json("/api/Pago/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Payment, String> {
    http::get_json(&format!("/api/Pago/Obtener/{}", id)).await
}

pub async fn create(payment: &Payment) -> Result<(), String> {
    http::post_unit("/api/Pago/Nuevo", payment).await
}

pub async fn update(payment: &Payment) -> Result<(), String> {
    http::put_unit("/api/Pago/Editar", payment).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Pago/Eliminar/{}", id)).await
}
