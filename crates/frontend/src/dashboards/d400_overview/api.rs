use contracts::dashboards::d400_overview::DashboardSummary;

use crate::shared::http;

/// Aggregate counters for the overview dashboard.
pub async fn fetch_summary() -> Result<DashboardSummary, String> {
    http::get_json("/api/Dashboard/Resumen").await
}
