use contracts::domain::a002_employee::Employee;

use crate::shared::http;

pub async fn fetch_all() -> Result<Vec<Employee>, String> {
    http::get_json("/api/Empleado/Lista").await
}

pub async fn fetch_by_id(id: i32) -> Result<Employee, String> {
    http::get_json(&format!("/api/Empleado/Obtener/{}", id)).await
}

pub async fn create(employee: &Employee) -> Result<(), String> {
    http::post_unit("/api/Empleado/Nuevo", employee).await
}

pub async fn update(employee: &Employee) -> Result<(), String> {
    http::put_unit("/api/Empleado/Editar", employee).await
}

pub async fn delete(id: i32) -> Result<(), String> {
    http::delete_unit(&format!("/api/Empleado/Eliminar/{}", id)).await
}
