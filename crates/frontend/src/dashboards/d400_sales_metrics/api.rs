use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::dashboards::d400_sales_metrics::DashboardMetricsResponse;

/// `GET /dashboard/metrics`
pub async fn get_dashboard_metrics() -> Result<DashboardMetricsResponse, ApiError> {
    get_json(&api_url("/dashboard/metrics")).await
}
