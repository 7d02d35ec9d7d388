use crate::shared::api_utils::{api_url, get_json, ApiError};
use contracts::domain::a003_sale::Sale;

/// `GET /sales/`
pub async fn fetch_sales() -> Result<Vec<Sale>, ApiError> {
    get_json(&api_url("/sales/")).await
}
