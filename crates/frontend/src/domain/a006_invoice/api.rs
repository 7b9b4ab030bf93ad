use contracts::domain::a006_invoice::{Invoice, InvoiceExists, InvoiceTotal};

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Invoice>, String> {
    http::get_json("/api/Factura/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Invoice, String> {
    http::get_json(&format!("/api/Factura/Obtener/{}", id)).await
}

pub async fn create(invoice: &Invoice) -> Result<(), String> {
    http::post_unit("/api/Factura/Nuevo", invoice).await
}

pub async fn update(invoice: &Invoice) -> Result<(), String> {
    http::put_unit("/api/Factura/Editar", invoice).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Factura/Eliminar/{}", id)).await
}

/// Server-side total for a reservation (room nights plus services).
pub async fn calculate_total(reservation_id: i32) -> Result<f64, String> {
    let response: InvoiceTotal =
        http::get_json(&format!("/api/Factura/CalcularTotal/{}", reservation_id)).await?;
    Ok(response.total)
}

/// Duplicate guard: whether an invoice already exists for the reservation.
pub async fn exists_for_reservation(reservation_id: i32) -> Result<bool, String> {
    let response: InvoiceExists =
        http::get_json(&format!("/api/Factura/ExistePorReserva/{}", reservation_id)).await?;
    Ok(response.exists)
}
