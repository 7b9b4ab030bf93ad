use serde::{Deserialize, Serialize};

/// Aggregate counters from `Dashboard/Resumen`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalClientes")]
    pub total_clients: i64,
    #[serde(rename = "totalEmpleados")]
    pub total_employees: i64,
    #[serde(rename = "habitacionesDisponibles")]
    pub available_rooms: i64,
    #[serde(rename = "reservasActivas")]
    pub active_reservations: i64,
    #[serde(rename = "ingresosMes")]
    pub month_income: f64,
}
